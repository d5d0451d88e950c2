use crate::domain::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    pub verbose: bool,
    /// インタプリタのパス（None なら CMDRUN_SHELL / 既定）
    pub shell: Option<String>,
    /// インタプリタへコマンドを渡すフラグ（None なら CMDRUN_SHELL_FLAG / 既定）
    pub shell_flag: Option<String>,
    /// JSONL ログの出力先（None なら CMDRUN_LOG_FILE / 出力なし）
    pub log_file: Option<String>,
    pub ignore_interrupts: bool,
    /// 終了後に stderr へ JSON レポートを出す
    pub report: bool,
    /// 位置引数（空白 1 つで連結して 1 つのコマンドにする）
    pub command_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            shell: None,
            shell_flag: None,
            log_file: None,
            ignore_interrupts: true,
            report: false,
            command_words: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("cmdrun")
        .about("Run a command through the command interpreter and exit with its normalized status")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .value_name("path")
                .help("Command interpreter (default: $CMDRUN_SHELL or /bin/sh)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("shell-flag")
                .long("shell-flag")
                .value_name("flag")
                .help("Flag that passes the command to the interpreter (default: $CMDRUN_SHELL_FLAG or -c)")
                .allow_hyphen_values(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("Append JSONL logs to this file (default: $CMDRUN_LOG_FILE)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-ignore-interrupts")
                .long("no-ignore-interrupts")
                .help("Do not ignore SIGINT/SIGQUIT while waiting for the command")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("report")
                .long("report")
                .help("Print a one-line JSON report to stderr after the command finishes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("command")
                .value_name("command")
                .help("Command string; multiple words are joined with spaces")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        shell: matches.get_one::<String>("shell").cloned(),
        shell_flag: matches.get_one::<String>("shell-flag").cloned(),
        log_file: matches.get_one::<String>("log-file").cloned(),
        ignore_interrupts: !matches.get_flag("no-ignore-interrupts"),
        report: matches.get_flag("report"),
        command_words: matches
            .get_many::<String>("command")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "cmdrun", &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    Command::run_from_words(&config.command_words)
}

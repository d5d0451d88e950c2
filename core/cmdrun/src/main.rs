mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

use std::process;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::Command;
use ports::inbound::UseCaseRunner;
use wiring::{wire_cmdrun, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        match config_to_command(&config) {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Run { invocation } => {
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Debug, "cmdrun started")
                        .layer("cli")
                        .kind("lifecycle")
                        .field("command", invocation.as_str()),
                );
                let output = self.app.run_command_use_case.run(&invocation)?;
                if config.report {
                    let report = self.app.run_command_use_case.report(&invocation, &output);
                    eprintln!("{}", report.to_json_line()?);
                }
                let exit_code = output.exit_code();
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Debug, "cmdrun finished")
                        .layer("cli")
                        .kind("lifecycle")
                        .field("exit_code", exit_code),
                );
                Ok(exit_code)
            }
        }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("cmdrun: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: cmdrun [-h] [-v] [-s|--shell path] [--shell-flag flag] [--log-file path] [--no-ignore-interrupts] [--report] [--] [command...]");
}

fn print_help() {
    println!("Usage: cmdrun [-h] [-v] [-s|--shell path] [--shell-flag flag] [--log-file path] [--no-ignore-interrupts] [--report] [--] [command...]");
    println!("  -h, --help               Display this help message.");
    println!("  -v, --verbose            Print debug logs to stderr.");
    println!("  -s, --shell <path>       Command interpreter. Default: $CMDRUN_SHELL or /bin/sh.");
    println!("  --shell-flag <flag>      Flag passing the command to the interpreter. Default: $CMDRUN_SHELL_FLAG or -c.");
    println!("  --log-file <path>        Append JSONL logs to this file. Default: $CMDRUN_LOG_FILE.");
    println!("  --no-ignore-interrupts   Do not ignore SIGINT/SIGQUIT while waiting for the command.");
    println!("  --report                 Print a one-line JSON report to stderr after the command finishes.");
    println!("  --generate <shell>       Generate shell completion script (bash, zsh, fish).");
    println!("  [command...]             Command string; words are joined with single spaces.");
    println!();
    println!("Exit status:");
    println!("  The command's exit code (0-255) if it exited normally, 1 if it was killed by a signal");
    println!("  or the interpreter could not be started, 64 on usage errors.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_cmdrun(&config);
    let runner = Runner { app };
    runner.run(config)
}

//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StderrLog, TeeLog};
use common::config::RunnerConfig;
use common::ports::outbound::{CommandRunner, EnvResolver, Log, LogLevel};

use crate::cli::Config;
use crate::usecase::RunCommandUseCase;

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub run_command_use_case: RunCommandUseCase,
    /// 構造化ログ。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// ログの出力先を組み立てる（-v なら stderr、ログファイル指定があれば JSONL、両方なら両方）
fn wire_logger(env_resolver: &dyn EnvResolver, config: &Config) -> Arc<dyn Log> {
    let mut sinks: Vec<Arc<dyn Log>> = Vec::new();
    if config.verbose {
        sinks.push(Arc::new(StderrLog::new(LogLevel::Debug)));
    }
    if let Some(path) = env_resolver.resolve_log_file_path(config.log_file.as_deref()) {
        sinks.push(Arc::new(FileJsonLog::new(path)));
    }
    match sinks.len() {
        0 => Arc::new(NoopLog),
        1 => sinks.remove(0),
        _ => Arc::new(TeeLog::new(sinks)),
    }
}

/// 配線: 環境変数解決を差し替えて App を組み立てる
pub fn wire_cmdrun_with_env(env_resolver: Arc<dyn EnvResolver>, config: &Config) -> App {
    let logger = wire_logger(env_resolver.as_ref(), config);
    let runner_config = RunnerConfig::resolve(
        env_resolver.as_ref(),
        config.shell.as_deref(),
        config.shell_flag.as_deref(),
        config.ignore_interrupts,
    );
    let runner: Arc<dyn CommandRunner> =
        Arc::new(runner_config.build_runner(Arc::clone(&logger)));
    App {
        run_command_use_case: RunCommandUseCase::new(runner, Arc::clone(&logger)),
        logger,
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_cmdrun(config: &Config) -> App {
    wire_cmdrun_with_env(Arc::new(StdEnvResolver), config)
}

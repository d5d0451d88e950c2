//! Outbound ポート: アプリが外界（子プロセス・環境変数・ログ）を使うための trait

pub mod command_runner;
pub mod env_resolver;
pub mod log;

pub use command_runner::CommandRunner;
pub use env_resolver::{EnvResolver, ENV_LOG_FILE, ENV_SHELL, ENV_SHELL_FLAG};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};

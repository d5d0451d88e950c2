//! アダプター（外界の I/O を trait で抽象化した実装）
//!
//! usecase は ports の trait 経由でのみ子プロセス・環境変数・ログに触れる。
//! ここには標準実装（Std*）と、ログの出力先ごとの実装を置く。

pub mod file_json_log;
pub mod std_command_runner;
pub mod std_env_resolver;
pub mod stderr_log;
pub mod tee_log;

#[cfg(unix)]
pub mod interrupt_guard;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_command_runner::StdCommandRunner;
pub use std_env_resolver::StdEnvResolver;
pub use stderr_log::StderrLog;
pub use tee_log::TeeLog;

#[cfg(unix)]
pub use interrupt_guard::InterruptGuard;

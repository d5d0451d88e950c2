//! 標準コマンド実行（std::process::Command を委譲）

use crate::adapter::NoopLog;
use crate::domain::{CommandInvocation, Execution, Interpreter, Termination};
use crate::error::Error;
use crate::ports::outbound::{CommandRunner, Log, LogLevel, LogRecord};
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use std::time::Instant;

#[cfg(unix)]
use crate::adapter::InterruptGuard;

const LAYER: &str = "adapter";
const KIND: &str = "process";

/// 標準ライブラリの Command を使う CommandRunner 実装
///
/// `<program> <command_flag> <command>` を起動し、終了まで待つ。標準入出力は親から引き継ぐ。
#[derive(Clone)]
pub struct StdCommandRunner {
    interpreter: Interpreter,
    ignore_interrupts: bool,
    logger: Arc<dyn Log>,
}

impl StdCommandRunner {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            ignore_interrupts: true,
            logger: Arc::new(NoopLog),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = logger;
        self
    }

    /// 待機中に SIGINT / SIGQUIT を無視するか（Unix のみ有効。既定は true）
    pub fn with_ignore_interrupts(mut self, ignore: bool) -> Self {
        self.ignore_interrupts = ignore;
        self
    }

    fn log(&self, record: LogRecord) {
        // ログの失敗で終了コードは変えない
        let _ = self.logger.log(&record.layer(LAYER).kind(KIND));
    }

    fn spawn_and_wait(&self, command: &CommandInvocation) -> Result<ExitStatus, Error> {
        let mut cmd = Command::new(self.interpreter.program());
        cmd.arg(self.interpreter.command_flag());
        // cmd.exe /C は MSVC 流のクォートを解釈しないので、コマンド文字列はそのまま渡す
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.raw_arg(command.as_str());
        }
        #[cfg(not(windows))]
        cmd.arg(command.as_str());

        #[cfg(unix)]
        let _guard = if self.ignore_interrupts {
            use std::os::unix::process::CommandExt;
            let guard = InterruptGuard::acquire().map_err(|e| {
                Error::system(format!("Failed to ignore SIGINT/SIGQUIT: {}", e))
            })?;
            unsafe {
                cmd.pre_exec(guard.child_reset());
            }
            Some(guard)
        } else {
            None
        };

        cmd.status()
            .map_err(|e| Error::spawn(self.interpreter.program(), e))
    }
}

impl Default for StdCommandRunner {
    fn default() -> Self {
        Self::new(Interpreter::platform_default())
    }
}

impl std::fmt::Debug for StdCommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdCommandRunner")
            .field("interpreter", &self.interpreter)
            .field("ignore_interrupts", &self.ignore_interrupts)
            .finish_non_exhaustive()
    }
}

impl CommandRunner for StdCommandRunner {
    fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    fn execute(&self, command: &CommandInvocation) -> Result<Execution, Error> {
        let started = Instant::now();
        self.log(
            LogRecord::new(LogLevel::Debug, "command started")
                .field("interpreter", self.interpreter.to_string())
                .field("command", command.as_str())
                .field("command_line", self.interpreter.command_line(command)),
        );

        let status = match self.spawn_and_wait(command) {
            Ok(status) => status,
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Error, "command failed to start")
                        .field("interpreter", self.interpreter.to_string())
                        .field("command", command.as_str())
                        .field("error", e.to_string()),
                );
                return Err(e);
            }
        };

        let termination = Termination::from_status(status);
        let duration_ms = started.elapsed().as_millis() as u64;
        let mut record = LogRecord::new(LogLevel::Info, "command finished")
            .field("command", command.as_str())
            .field("outcome", termination.outcome())
            .field("exit_code", termination.exit_code())
            .field("duration_ms", duration_ms);
        if let Termination::Signaled { signal, core_dumped } = termination {
            record = record
                .field("signal", signal)
                .field("core_dumped", core_dumped);
        }
        self.log(record);

        Ok(Execution {
            termination,
            duration_ms,
        })
    }
}


#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;

    #[test]
    fn test_quoted_command_reaches_cmd_unchanged() {
        let runner = StdCommandRunner::default();
        assert_eq!(runner.run("exit /b 3"), 3);
        assert_eq!(runner.run(r#"if "a"=="a" exit /b 4"#), 4);
    }
}

//! Run コマンドのユースケース
//!
//! コマンド文字列を CommandRunner で実行し、終了状態と所要時間を返す。
//! 所要時間は CommandRunner が計測した値をそのまま使う。

use crate::domain::RunReport;
use common::domain::{CommandInvocation, Execution, Termination};
use common::error::Error;
use common::ports::outbound::{CommandRunner, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// Run コマンドのユースケース
pub struct RunCommandUseCase {
    runner: Arc<dyn CommandRunner>,
    logger: Arc<dyn Log>,
}

impl RunCommandUseCase {
    pub fn new(runner: Arc<dyn CommandRunner>, logger: Arc<dyn Log>) -> Self {
        Self { runner, logger }
    }

    /// コマンドを実行する
    ///
    /// インタプリタを起動できなかった場合はエラーを返す（終了コードは Error::exit_code で 1）。
    pub fn run(&self, invocation: &CommandInvocation) -> Result<Execution, Error> {
        match self.runner.execute(invocation) {
            Ok(execution) => {
                let termination = execution.termination;
                if !matches!(termination, Termination::Exited { .. }) {
                    let _ = self.logger.log(
                        &LogRecord::new(LogLevel::Warn, "command terminated abnormally")
                            .layer("usecase")
                            .kind("process")
                            .field("termination", termination.to_string())
                            .field("exit_code", termination.exit_code()),
                    );
                }
                Ok(execution)
            }
            Err(e) => {
                let _ = self.logger.log(
                    &LogRecord::new(LogLevel::Error, e.to_string())
                        .layer("usecase")
                        .kind("error"),
                );
                Err(e)
            }
        }
    }

    /// `--report` 用のレポートを組み立てる
    pub fn report(&self, invocation: &CommandInvocation, execution: &Execution) -> RunReport {
        RunReport::new(
            invocation,
            self.runner.interpreter(),
            execution.termination,
            execution.duration_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::NoopLog;
    use common::domain::Interpreter;
    use std::sync::Mutex;

    struct FixedRunner {
        interpreter: Interpreter,
        termination: Option<Termination>,
        duration_ms: u64,
    }

    impl CommandRunner for FixedRunner {
        fn interpreter(&self) -> &Interpreter {
            &self.interpreter
        }

        fn execute(&self, _command: &CommandInvocation) -> Result<Execution, Error> {
            let termination = self.termination.ok_or_else(|| {
                Error::spawn(
                    self.interpreter.program(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
                )
            })?;
            Ok(Execution {
                termination,
                duration_ms: self.duration_ms,
            })
        }
    }

    #[derive(Default)]
    struct MemoryLog(Mutex<Vec<LogRecord>>);

    impl Log for MemoryLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn use_case(termination: Option<Termination>, log: Arc<dyn Log>) -> RunCommandUseCase {
        RunCommandUseCase::new(
            Arc::new(FixedRunner {
                interpreter: Interpreter::new("/bin/sh", "-c"),
                termination,
                duration_ms: 1234,
            }),
            log,
        )
    }

    #[test]
    fn test_exit_code_passes_through() {
        let uc = use_case(Some(Termination::Exited { code: 42 }), Arc::new(NoopLog));
        let out = uc.run(&CommandInvocation::from("exit 42")).unwrap();
        assert_eq!(out.exit_code(), 42);
    }

    #[test]
    fn test_signal_is_logged_and_collapsed() {
        let log = Arc::new(MemoryLog::default());
        let uc = use_case(
            Some(Termination::Signaled {
                signal: 15,
                core_dumped: false,
            }),
            log.clone(),
        );
        let out = uc.run(&CommandInvocation::from("kill $$")).unwrap();
        assert_eq!(out.exit_code(), 1);

        let records = log.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(
            records[0].fields.as_ref().unwrap()["termination"],
            "killed by signal 15"
        );
    }

    #[test]
    fn test_spawn_failure_is_error() {
        let log = Arc::new(MemoryLog::default());
        let uc = use_case(None, log.clone());
        let err = uc.run(&CommandInvocation::from("exit 0")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(log.0.lock().unwrap()[0].level, LogLevel::Error);
    }

    #[test]
    fn test_report_uses_runner_interpreter() {
        let uc = use_case(Some(Termination::Exited { code: 0 }), Arc::new(NoopLog));
        let inv = CommandInvocation::from("true");
        let out = uc.run(&inv).unwrap();
        let report = uc.report(&inv, &out);
        assert_eq!(report.interpreter, "/bin/sh -c");
        assert_eq!(report.exit_code, 0);
    }

    #[test]
    fn test_report_uses_runner_duration() {
        let uc = use_case(Some(Termination::Exited { code: 0 }), Arc::new(NoopLog));
        let inv = CommandInvocation::from("true");
        let out = uc.run(&inv).unwrap();
        assert_eq!(out.duration_ms, 1234);
        assert_eq!(uc.report(&inv, &out).duration_ms, 1234);
    }
}

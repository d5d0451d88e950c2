//! コマンド実行 Outbound ポート
//!
//! コマンド文字列をインタプリタで同期実行し、終了状態を返す。

use crate::domain::{CommandInvocation, Execution, Interpreter, Termination, ABNORMAL_EXIT_CODE};
use crate::error::Error;

/// コマンド文字列を同期実行する抽象
///
/// 1 回の呼び出しで子プロセスを 1 つ起動し、終了するまで呼び出しスレッドをブロックする。
/// リトライ・タイムアウト・キャンセルはない。子プロセスは親の標準入出力を引き継ぐ。
///
/// 実装は `common::adapter::StdCommandRunner`（std::process::Command）やテスト用のモックなど。
/// 複数スレッドから同時に呼べるのは、下層のプロセス起動（std::process::Command）が
/// スレッドセーフであることを前提にしている。
pub trait CommandRunner: Send + Sync {
    /// 使用するインタプリタ
    fn interpreter(&self) -> &Interpreter;

    /// コマンドを実行し、終了状態と所要時間を返す
    ///
    /// インタプリタを起動できなかった場合や wait に失敗した場合は `Error::Spawn`。
    fn execute(&self, command: &CommandInvocation) -> Result<Execution, Error>;

    /// コマンドを実行し、終了状態をそのまま返す
    fn status(&self, command: &CommandInvocation) -> Result<Termination, Error> {
        self.execute(command).map(|e| e.termination)
    }

    /// シェル互換の終了コードだけを返す
    ///
    /// 正常終了なら 0..=255 のコード、シグナル等の異常終了と起動失敗は 1。
    fn run(&self, command: &str) -> i32 {
        match self.status(&CommandInvocation::from(command)) {
            Ok(termination) => termination.exit_code(),
            Err(_) => ABNORMAL_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 事前に決めた結果を返すモック
    struct ScriptedRunner {
        interpreter: Interpreter,
        result: fn() -> Result<Termination, Error>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(result: fn() -> Result<Termination, Error>) -> Self {
            Self {
                interpreter: Interpreter::platform_default(),
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn interpreter(&self) -> &Interpreter {
            &self.interpreter
        }

        fn execute(&self, command: &CommandInvocation) -> Result<Execution, Error> {
            self.seen.lock().unwrap().push(command.as_str().to_string());
            (self.result)().map(|termination| Execution {
                termination,
                duration_ms: 0,
            })
        }
    }

    #[test]
    fn test_run_returns_exit_code() {
        let runner = ScriptedRunner::new(|| Ok(Termination::Exited { code: 42 }));
        assert_eq!(runner.run("exit 42"), 42);
        assert_eq!(runner.seen.lock().unwrap().as_slice(), ["exit 42"]);
    }

    #[test]
    fn test_run_collapses_signal_to_one() {
        let runner = ScriptedRunner::new(|| {
            Ok(Termination::Signaled {
                signal: 9,
                core_dumped: false,
            })
        });
        assert_eq!(runner.run("kill -KILL $$"), 1);
    }

    #[test]
    fn test_run_maps_spawn_failure_to_one() {
        let runner = ScriptedRunner::new(|| {
            Err(Error::spawn(
                "/nonexistent",
                std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            ))
        });
        assert_eq!(runner.run(""), 1);
    }

    #[test]
    fn test_status_drops_duration() {
        let runner = ScriptedRunner::new(|| Ok(Termination::Exited { code: 3 }));
        let t = runner.status(&CommandInvocation::from("exit 3")).unwrap();
        assert_eq!(t, Termination::Exited { code: 3 });
    }
}

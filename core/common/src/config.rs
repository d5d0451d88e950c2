//! 実行設定
//!
//! インタプリタや割り込みの扱いを暗黙の環境依存にせず、値として明示する。

use crate::adapter::StdCommandRunner;
use crate::domain::Interpreter;
use crate::ports::outbound::{EnvResolver, Log};
use std::sync::Arc;

/// CommandRunner の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub interpreter: Interpreter,
    /// 待機中に SIGINT / SIGQUIT を無視する（Unix のみ）
    pub ignore_interrupts: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: Interpreter::platform_default(),
            ignore_interrupts: true,
        }
    }
}

impl RunnerConfig {
    /// 明示値 > 環境変数 > 既定 の順で解決する
    pub fn resolve(
        env: &dyn EnvResolver,
        shell: Option<&str>,
        shell_flag: Option<&str>,
        ignore_interrupts: bool,
    ) -> Self {
        Self {
            interpreter: env.resolve_interpreter(shell, shell_flag),
            ignore_interrupts,
        }
    }

    /// 設定から標準の CommandRunner を組み立てる
    pub fn build_runner(&self, logger: Arc<dyn Log>) -> StdCommandRunner {
        StdCommandRunner::new(self.interpreter.clone())
            .with_ignore_interrupts(self.ignore_interrupts)
            .with_logger(logger)
    }
}

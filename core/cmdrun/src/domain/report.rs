//! `--report` で stderr に出す 1 行 JSON

use common::domain::{CommandInvocation, Interpreter, Termination};
use common::error::Error;
use serde::Serialize;

/// 実行結果のレポート
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub command: String,
    pub interpreter: String,
    #[serde(flatten)]
    pub termination: Termination,
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn new(
        invocation: &CommandInvocation,
        interpreter: &Interpreter,
        termination: Termination,
        duration_ms: u64,
    ) -> Self {
        Self {
            command: invocation.to_string(),
            interpreter: interpreter.to_string(),
            termination,
            exit_code: termination.exit_code(),
            duration_ms,
        }
    }

    pub fn to_json_line(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

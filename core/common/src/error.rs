//! エラーハンドリング
//!
//! ライブラリと CLI で共有するエラー型。`exit_code()` で CLI の終了コードに落とす。

use crate::domain::ABNORMAL_EXIT_CODE;
use std::path::PathBuf;

/// 引数不正（EX_USAGE）
pub const EXIT_USAGE: i32 = 64;
/// 内部エラー（EX_SOFTWARE）
pub const EXIT_SOFTWARE: i32 = 70;
/// I/O エラー（EX_IOERR）
pub const EXIT_IOERR: i32 = 74;
/// 設定エラー（EX_CONFIG）
pub const EXIT_CONFIG: i32 = 78;

/// エラー型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Env(String),

    #[error("{0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("{0}")]
    System(String),

    /// インタプリタを起動できなかった、または終了待ちに失敗した
    #[error("Failed to execute '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// 環境変数・設定の解決エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 子プロセスの起動・待機失敗
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Spawn {
            program: program.into(),
            source,
        }
    }

    /// CLI の終了コード
    ///
    /// 子プロセスを起動できなかった場合は異常終了と同じ 1 を返す（`system(3)` と同じ扱い）。
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => EXIT_USAGE,
            Error::Env(_) => EXIT_CONFIG,
            Error::Io(_) => EXIT_IOERR,
            Error::Json(_) | Error::System(_) => EXIT_SOFTWARE,
            Error::Spawn { .. } => ABNORMAL_EXIT_CODE,
        }
    }

    /// 使い方を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

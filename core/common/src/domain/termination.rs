//! 子プロセスの終了状態と終了コードの正規化

use serde::Serialize;

/// 正常終了以外（シグナル・停止など）で返す終了コード
pub const ABNORMAL_EXIT_CODE: i32 = 1;

/// 子プロセスの終了状態
///
/// 原因（正常終了 / シグナル）を失わずに保持する。シェル風の整数が欲しい呼び出し側は
/// [`Termination::exit_code`] を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Termination {
    /// 正常終了（0..=255）
    Exited { code: u8 },
    /// シグナルで終了
    Signaled { signal: i32, core_dumped: bool },
    /// 上記以外（停止など、プラットフォームが返したが分類できない状態）
    Unknown,
}

impl Termination {
    /// std の ExitStatus から変換する
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            // Unix では WEXITSTATUS で 0..=255 に収まる。Windows の 32bit コードは下位 8bit を取る
            return Termination::Exited { code: (code & 0xff) as u8 };
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Termination::Signaled {
                    signal,
                    core_dumped: status.core_dumped(),
                };
            }
        }
        Termination::Unknown
    }

    /// シェル互換の終了コード（正常終了ならそのコード、それ以外は 1）
    pub fn exit_code(&self) -> i32 {
        match self {
            Termination::Exited { code } => i32::from(*code),
            Termination::Signaled { .. } | Termination::Unknown => ABNORMAL_EXIT_CODE,
        }
    }

    /// ログ・レポート用の短い分類名
    pub fn outcome(&self) -> &'static str {
        match self {
            Termination::Exited { .. } => "exited",
            Termination::Signaled { .. } => "signaled",
            Termination::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Exited { code } => write!(f, "exited with code {}", code),
            Termination::Signaled {
                signal,
                core_dumped: true,
            } => write!(f, "killed by signal {} (core dumped)", signal),
            Termination::Signaled { signal, .. } => write!(f, "killed by signal {}", signal),
            Termination::Unknown => write!(f, "terminated abnormally"),
        }
    }
}

/// 1 回の実行結果（終了状態と、起動から終了までの所要時間）
///
/// 所要時間はコマンド実行側で 1 度だけ計測し、ログとレポートで同じ値を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub termination: Termination,
    pub duration_ms: u64,
}

impl Execution {
    pub fn exit_code(&self) -> i32 {
        self.termination.exit_code()
    }
}

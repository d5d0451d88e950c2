//! cmdrun 共通ライブラリ
//!
//! コマンド文字列をインタプリタで同期実行し、終了状態を正規化した終了コードに変換する。
//! `cmdrun` コマンドと、整数の終了コードだけが欲しい呼び出し側で共有する。

/// エラーハンドリング
pub mod error;

/// ドメイン型（コマンド・インタプリタ・終了状態）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// 実行設定
pub mod config;

use adapter::StdCommandRunner;
use domain::{CommandInvocation, Termination};
use error::Error;
use ports::outbound::CommandRunner;

/// プラットフォーム既定のインタプリタでコマンドを実行し、シェル互換の終了コードを返す
///
/// 正常終了ならそのコード（0..=255）、シグナル等による異常終了・起動失敗は 1。
pub fn run(command: &str) -> i32 {
    StdCommandRunner::default().run(command)
}

/// プラットフォーム既定のインタプリタでコマンドを実行し、終了状態を返す
pub fn status(command: &str) -> Result<Termination, Error> {
    StdCommandRunner::default().status(&CommandInvocation::from(command))
}

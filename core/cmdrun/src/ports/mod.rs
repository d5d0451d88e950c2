//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出す trait
//! - outbound: common::ports::outbound をそのまま使う

pub mod inbound;

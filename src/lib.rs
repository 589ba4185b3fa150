//! pgprobe
//!
//! pgプロキシのヘルスエンドポイントを定期ポーリングする診断ツール

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ポーリングループ
pub mod poller;

/// 結果の整形・出力
pub mod report;

/// 型定義
pub mod types;

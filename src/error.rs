//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// 診断ポーラーのエラー型
///
/// いずれも局所的に回復せず、`perform_call`から`run`まで伝播する。
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 接続確立失敗・DNS失敗・タイムアウト・TLSエラー
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// レスポンスボディがJSONとしてパースできない
    #[error("Decode error for call '{call}': {source}")]
    Decode {
        /// 失敗した呼び出しのラベル
        call: &'static str,
        /// パースエラー本体
        #[source]
        source: serde_json::Error,
    },

    /// 設定エラー（起動時検証のみ）
    #[error("Configuration error: {0}")]
    Config(String),
}

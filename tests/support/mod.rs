//! テスト用ユーティリティ

use pgprobe::config::RunConfig;

/// モックサーバーのURIを差し込んだテスト用設定を作る
///
/// 遅延は0にしてテストを即時完了させる。
#[allow(dead_code)]
pub fn test_config(base_uri: &str, iterations: u32) -> RunConfig {
    RunConfig {
        base_url_template: format!("{}/pg/{{}}", base_uri),
        host_header: "us-east-2.pg-client.konghq.tech".to_string(),
        iterations,
        delay_secs: 0.0,
    }
}

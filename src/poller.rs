//! ポーリングループ
//!
//! 固定の5呼び出しを順番に実行し、1行ずつ整形してシンクへ流す。
//! リトライ・バックオフは行わず、最初の失敗で実行全体を中断する。

use crate::config::RunConfig;
use crate::error::ProbeError;
use crate::report::{self, ReportSink};
use crate::types::{EndpointCall, ResponseRecord, DIAGNOSTIC_CALLS};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// 診断ポーラー
///
/// HTTPクライアントは起動時に一度だけ構築する。ターゲットは内部LBの
/// アドレス経由で別の仮想ホストを提示するため、証明書検証は無効化し、
/// Hostヘッダーを設定値で上書きする。タイムアウトはトランスポートの
/// デフォルトのまま（元スクリプトと同じ）。
pub struct Poller {
    /// HTTPクライアント
    client: Client,
    /// 実行設定
    config: RunConfig,
}

impl Poller {
    /// 新しいポーラーを作成
    pub fn new(config: RunConfig) -> Self {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// 単一の呼び出しを実行し、レスポンスレコードを返す
    pub async fn perform_call(&self, call: &EndpointCall) -> Result<ResponseRecord, ProbeError> {
        let url = self.config.url_for(call.path);
        let start = Instant::now();

        let response = self
            .client
            .request(call.method.into(), url.as_str())
            .header(reqwest::header::HOST, self.config.host_header.as_str())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        let payload = serde_json::from_str(&body).map_err(|source| ProbeError::Decode {
            call: call.name,
            source,
        })?;

        debug!(
            call = call.name,
            method = call.method.as_str(),
            url = %url,
            status = status,
            latency_ms = start.elapsed().as_millis() as u64,
            "Call completed"
        );

        Ok(ResponseRecord::from_parts(status, &headers, payload))
    }

    /// 1サイクル分（固定5呼び出し）を順番に実行する
    ///
    /// 各行は呼び出し完了直後に出力する（バッチせずストリーミング）。
    pub async fn run_cycle(&self, sink: &mut dyn ReportSink) -> Result<(), ProbeError> {
        for call in &DIAGNOSTIC_CALLS {
            let record = self.perform_call(call).await?;
            sink.emit(&report::format_line(call.name, &record));
        }
        sink.emit(report::SEPARATOR);
        Ok(())
    }

    /// 設定された回数だけサイクルを実行する
    ///
    /// 連続するサイクルの間でのみ待機し、最終サイクル後は待機しない。
    pub async fn run(&self, sink: &mut dyn ReportSink) -> Result<(), ProbeError> {
        info!(
            iterations = self.config.iterations,
            delay_secs = self.config.delay_secs,
            "Starting diagnostic run"
        );

        sink.emit(report::BANNER);

        for i in 0..self.config.iterations {
            self.run_cycle(sink).await?;

            if i + 1 < self.config.iterations {
                tokio::time::sleep(Duration::from_secs_f64(self.config.delay_secs)).await;
            }
        }

        info!("Diagnostic run completed");
        Ok(())
    }
}

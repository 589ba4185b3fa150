//! CLIインターフェース
//!
//! 全フラグに環境変数フォールバックあり。デフォルト値は元の
//! 診断対象（pgプロキシ）の固定値を再現する。

use crate::config::{RunConfig, DEFAULT_BASE_URL_TEMPLATE, DEFAULT_HOST_HEADER};
use clap::Parser;

/// pgprobe - pg proxy health endpoint diagnostic poller
#[derive(Parser, Debug)]
#[command(name = "pgprobe")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PGPROBE_BASE_URL       Base URL template with a '{}' path placeholder
    PGPROBE_HOST_HEADER    Host header override sent with every request
    PGPROBE_ITERATIONS     Number of polling cycles (default: 2)
    PGPROBE_DELAY_SECS     Delay between cycles in seconds (default: 2)
    PGPROBE_LOG_LEVEL      Log level for diagnostics on stderr (default: info)
"#)]
pub struct Cli {
    /// ベースURLテンプレート（`{}`にパスサフィックスが入る）
    #[arg(long, env = "PGPROBE_BASE_URL", default_value = DEFAULT_BASE_URL_TEMPLATE)]
    pub base_url: String,

    /// 全リクエストに付与するHostヘッダーの上書き値
    #[arg(long, env = "PGPROBE_HOST_HEADER", default_value = DEFAULT_HOST_HEADER)]
    pub host_header: String,

    /// サイクル実行回数
    #[arg(long, env = "PGPROBE_ITERATIONS", default_value_t = 2)]
    pub iterations: u32,

    /// サイクル間の待機秒数
    #[arg(long, env = "PGPROBE_DELAY_SECS", default_value_t = 2.0)]
    pub delay: f64,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            base_url_template: cli.base_url,
            host_header: cli.host_header,
            iterations: cli.iterations,
            delay_secs: cli.delay,
        }
    }
}

//! ロギング初期化ユーティリティ
//!
//! 診断イベントはstderrへ出す。stdoutはレポート行専用のため混ぜない。

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// ログレベルを指定する環境変数
pub const LOG_LEVEL_ENV: &str = "PGPROBE_LOG_LEVEL";

/// tracingサブスクライバーを初期化する
pub fn init() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}

//! 設定管理
//!
//! 起動時に一度だけ構築し、以降は読み取り専用のRunConfig

use crate::error::ProbeError;
use serde::{Deserialize, Serialize};

/// ベースURLテンプレートのデフォルト値
///
/// 内部LBのアドレスを直接叩くため、Hostヘッダーで仮想ホストを指定する。
pub const DEFAULT_BASE_URL_TEMPLATE: &str =
    "https://ac7cd861bf3544dbabd81392c4a2ead8-2d20923fc4ccb0b6.elb.us-east-2.amazonaws.com/pg/{}";

/// Hostヘッダー上書きのデフォルト値
pub const DEFAULT_HOST_HEADER: &str = "us-east-2.pg-client.konghq.tech";

/// 実行設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// ベースURLテンプレート（`{}`にパスサフィックスを差し込む）
    #[serde(default = "default_base_url_template")]
    pub base_url_template: String,

    /// 全リクエストに付与するHostヘッダーの上書き値
    #[serde(default = "default_host_header")]
    pub host_header: String,

    /// サイクル実行回数 (デフォルト: 2)
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// サイクル間の待機秒数 (デフォルト: 2.0)
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,
}

fn default_base_url_template() -> String {
    DEFAULT_BASE_URL_TEMPLATE.to_string()
}

fn default_host_header() -> String {
    DEFAULT_HOST_HEADER.to_string()
}

fn default_iterations() -> u32 {
    2
}

fn default_delay_secs() -> f64 {
    2.0
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url_template: default_base_url_template(),
            host_header: default_host_header(),
            iterations: default_iterations(),
            delay_secs: default_delay_secs(),
        }
    }
}

impl RunConfig {
    /// 起動時検証
    ///
    /// テンプレートにパスサフィックスの差し込み位置がないと
    /// 全呼び出しが同じURLを叩いてしまうため、ここで弾く。
    pub fn validate(&self) -> Result<(), ProbeError> {
        if !self.base_url_template.contains("{}") {
            return Err(ProbeError::Config(format!(
                "base URL template must contain a '{{}}' placeholder: {}",
                self.base_url_template
            )));
        }
        Ok(())
    }

    /// テンプレートにパスサフィックスを差し込んだURLを返す
    pub fn url_for(&self, path: &str) -> String {
        self.base_url_template.replace("{}", path)
    }
}

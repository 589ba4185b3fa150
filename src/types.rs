//! 型定義
//!
//! 固定エンドポイント呼び出しとレスポンスレコード

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTPメソッド（診断呼び出しで使用するもののみ）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallMethod {
    /// GETリクエスト
    Get,
    /// POSTリクエスト（ボディなし）
    Post,
}

impl CallMethod {
    /// メソッド名を文字列で返す
    pub fn as_str(&self) -> &'static str {
        match self {
            CallMethod::Get => "GET",
            CallMethod::Post => "POST",
        }
    }
}

impl From<CallMethod> for reqwest::Method {
    fn from(method: CallMethod) -> Self {
        match method {
            CallMethod::Get => reqwest::Method::GET,
            CallMethod::Post => reqwest::Method::POST,
        }
    }
}

/// 1回の診断呼び出しの定義（名前・メソッド・パスサフィックス）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointCall {
    /// 出力行のラベル
    pub name: &'static str,
    /// HTTPメソッド
    pub method: CallMethod,
    /// ベースURLテンプレートに差し込むパスサフィックス
    pub path: &'static str,
}

/// 毎サイクル実行する固定の呼び出し列（この順序で実行される）
pub const DIAGNOSTIC_CALLS: [EndpointCall; 5] = [
    EndpointCall {
        name: "main",
        method: CallMethod::Get,
        path: "pghealth",
    },
    EndpointCall {
        name: "ro",
        method: CallMethod::Get,
        path: "replstatusro",
    },
    EndpointCall {
        name: "pool",
        method: CallMethod::Get,
        path: "poolstats",
    },
    EndpointCall {
        name: "getfoo",
        method: CallMethod::Get,
        path: "foo",
    },
    EndpointCall {
        name: "postfoo",
        method: CallMethod::Post,
        path: "foo",
    },
];

/// 1回の呼び出し結果
///
/// 呼び出しごとに新規作成され、整形出力後は破棄される（保持しない）。
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    /// HTTPステータスコード
    pub status: u16,
    /// レスポンスヘッダー（挿入順は不問）
    pub headers: HashMap<String, String>,
    /// JSONとしてパースしたボディ
    pub payload: serde_json::Value,
}

impl ResponseRecord {
    /// ヘッダーマップを平坦化してレコードを組み立てる
    ///
    /// 不透明な（非UTF-8の）ヘッダー値は読み飛ばす。
    pub fn from_parts(
        status: u16,
        headers: &reqwest::header::HeaderMap,
        payload: serde_json::Value,
    ) -> Self {
        let headers = headers
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();

        Self {
            status,
            headers,
            payload,
        }
    }
}

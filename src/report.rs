//! 結果の整形・出力
//!
//! レコードの取得（poller）と描画を分離する。出力先はシンクとして
//! 注入できるため、テストでは標準出力を奪わずに検証できる。

use crate::types::ResponseRecord;
use chrono::Local;

/// 実行開始時に1行だけ出力するバナー
pub const BANNER: &str = "starting pgprobe run..";

/// サイクル区切り行
pub const SEPARATOR: &str = "==";

/// ラベルの左詰め幅（桁揃え用）
const LABEL_WIDTH: usize = 9;

/// 1呼び出し分の出力行を組み立てる
///
/// `<ラベル(左詰め9桁)><ローカル時刻> - code=<ステータス>, payload=<JSON>`
pub fn format_line(call_name: &str, record: &ResponseRecord) -> String {
    format!(
        "{:<width$}{} - code={}, payload={}",
        call_name,
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        record.status,
        record.payload,
        width = LABEL_WIDTH,
    )
}

/// 出力行のシンク
pub trait ReportSink {
    /// 1行を出力する
    fn emit(&mut self, line: &str);
}

/// 標準出力へのシンク（本番用）
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

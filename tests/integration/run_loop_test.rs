//! 実行ループの検証
//!
//! バナー・行数・区切り・中断・サイクル間待機の振る舞いを確認する。

use pgprobe::error::ProbeError;
use pgprobe::poller::Poller;
use pgprobe::report::{BANNER, SEPARATOR};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::test_config;

/// 全エンドポイントに200 {"status":"ok"}を返すモックを立てる
async fn mock_all_ok() -> MockServer {
    let mock = MockServer::start().await;

    let ok = ResponseTemplate::new(200).set_body_json(json!({"status": "ok"}));

    for (m, p) in [
        ("GET", "/pg/pghealth"),
        ("GET", "/pg/replstatusro"),
        ("GET", "/pg/poolstats"),
        ("GET", "/pg/foo"),
        ("POST", "/pg/foo"),
    ] {
        Mock::given(method(m))
            .and(path(p))
            .respond_with(ok.clone())
            .mount(&mock)
            .await;
    }

    mock
}

/// 2サイクル実行でバナー1行＋サイクルごとに5行＋区切り1行が出る
#[tokio::test]
async fn test_two_cycles_emit_expected_lines() {
    let mock = mock_all_ok().await;

    let poller = Poller::new(test_config(&mock.uri(), 2));
    let mut sink: Vec<String> = Vec::new();

    poller.run(&mut sink).await.unwrap();

    // バナー + 2 * (5行 + 区切り)
    assert_eq!(sink.len(), 13);
    assert_eq!(sink[0], BANNER);
    assert_eq!(sink[6], SEPARATOR);
    assert_eq!(sink[12], SEPARATOR);

    for cycle_start in [1, 7] {
        let labels = ["main", "ro", "pool", "getfoo", "postfoo"];
        for (i, label) in labels.iter().enumerate() {
            let line = &sink[cycle_start + i];
            assert!(
                line.starts_with(&format!("{:<9}", label)),
                "line was: {}",
                line
            );
            assert!(line.contains("code=200"), "line was: {}", line);
            assert!(
                line.contains(r#"payload={"status":"ok"}"#),
                "line was: {}",
                line
            );
        }
    }

    // リクエスト総数は2サイクル分ちょうど
    assert_eq!(mock.received_requests().await.unwrap().len(), 10);
}

/// 最初の呼び出しが接続失敗なら、それ以降の呼び出しは一切行われない
#[tokio::test]
async fn test_connection_failure_on_first_call_stops_the_run() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let poller = Poller::new(test_config(&format!("http://{}", addr), 3));
    let mut sink: Vec<String> = Vec::new();

    let err = poller.run(&mut sink).await.unwrap_err();

    assert!(matches!(err, ProbeError::Network(_)));
    // バナーだけが出て、レポート行は1行もない
    assert_eq!(sink, vec![BANNER.to_string()]);
}

/// サイクル途中のデコード失敗でも残りの呼び出しは行われない
#[tokio::test]
async fn test_decode_failure_mid_cycle_stops_the_run() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pg/pghealth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/pg/replstatusro"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock)
        .await;

    let poller = Poller::new(test_config(&mock.uri(), 2));
    let mut sink: Vec<String> = Vec::new();

    let err = poller.run(&mut sink).await.unwrap_err();

    assert!(matches!(err, ProbeError::Decode { call: "ro", .. }));

    // バナーと1行目（main）だけが出ている
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0], BANNER);
    assert!(sink[1].starts_with("main"));

    // 失敗した呼び出しより先には進まない
    assert_eq!(mock.received_requests().await.unwrap().len(), 2);
}

/// 最終サイクルの後には待機しない
#[tokio::test]
async fn test_no_delay_after_final_cycle() {
    let mock = mock_all_ok().await;

    let mut config = test_config(&mock.uri(), 1);
    config.delay_secs = 5.0;

    let poller = Poller::new(config);
    let mut sink: Vec<String> = Vec::new();

    let start = Instant::now();
    poller.run(&mut sink).await.unwrap();

    assert!(
        start.elapsed() < Duration::from_secs(2),
        "single-cycle run must not sleep"
    );
}

/// 連続するサイクルの間では設定した時間だけ待機する
#[tokio::test]
async fn test_delay_between_cycles() {
    let mock = mock_all_ok().await;

    let mut config = test_config(&mock.uri(), 2);
    config.delay_secs = 0.3;

    let poller = Poller::new(config);
    let mut sink: Vec<String> = Vec::new();

    let start = Instant::now();
    poller.run(&mut sink).await.unwrap();

    assert!(
        start.elapsed() >= Duration::from_millis(300),
        "inter-cycle delay was not applied"
    );
}

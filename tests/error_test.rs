//! エラーケーステスト
//!
//! 設定・ストア・接続先まわりのエラーハンドリングを検証

use picture_streamer_viewer::config::Config;
use picture_streamer_viewer::error::ViewerError;
use std::path::Path;
use tempfile::tempdir;

/// 不正なサーバーURLを引数で指定した場合
#[test]
fn test_resolve_invalid_server_override() {
    let config = Config::default();
    let result = config.resolve_server(Some("localhost:8888"));

    let err = result.unwrap_err();
    assert!(matches!(err, ViewerError::InvalidServerUrl(ref url) if url == "localhost:8888"));
}

/// 引数で指定した接続先が優先される
#[test]
fn test_resolve_server_override_wins() {
    let config = Config {
        server_url: "http://from-file:8888/".into(),
        ..Default::default()
    };
    let origin = config
        .resolve_server(Some("http://192.168.0.10:9000/"))
        .expect("接続先の解決に失敗");

    assert_eq!(origin.authority(), "192.168.0.10:9000");
    assert_eq!(origin.base_url(), "http://192.168.0.10:9000/");
}

/// 壊れた設定ファイルはJSONエラーになる
#[test]
fn test_load_corrupt_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("書き込み失敗");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ViewerError::JsonParse(_)));
}

/// 存在しない設定ファイルはデフォルト値
#[test]
fn test_load_missing_config_is_default() {
    let config = Config::load_from(Path::new("/nonexistent/path/12345/config.json"))
        .expect("読み込み失敗");

    assert_eq!(config.server_url, "http://localhost:8888/");
    assert_eq!(config.short_poll_ms, 100);
    assert_eq!(config.long_poll_ms, 5000);
    assert!(config.download_dir.is_none());
}

/// ViewerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ViewerError::Config("テスト設定エラー".to_string()),
        ViewerError::InvalidServerUrl("ftp//x".to_string()),
        ViewerError::UnexpectedStatus(500),
        ViewerError::ImageNotFound("a.jpg".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ViewerError = io_err.into();

    assert!(matches!(err, ViewerError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ViewerError = json_err.into();

    assert!(matches!(err, ViewerError::JsonParse(_)));
}

/// picture_streamer_common::Errorからの変換
#[test]
fn test_feed_error_conversion() {
    let feed_err = picture_streamer_common::Error::MalformedSnapshot("imageList".to_string());
    let err: ViewerError = feed_err.into();

    assert!(matches!(err, ViewerError::Feed(_)));
    assert!(format!("{}", err).contains("imageList"));
}

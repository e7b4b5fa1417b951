//! ファイルストアの統合テスト
//!
//! オプションとダウンロード済み集合がプロセスをまたいで残ることを検証

use picture_streamer_common::{
    ClientStore, FeedEvent, FeedSession, FeedSnapshot, ImageDescriptor, PollConfig,
};
use picture_streamer_viewer::config::Config;
use picture_streamer_viewer::store::{open_client_store, FileStore};
use tempfile::tempdir;

fn snapshot(counter: u64, names: &[&str]) -> FeedSnapshot {
    FeedSnapshot {
        image_counter: counter,
        image_list: names.iter().map(|n| ImageDescriptor::new(*n)).collect(),
        is_camera_connected: true,
        notification: None,
    }
}

// ============================================
// 永続化
// ============================================

#[test]
fn test_options_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let mut store = open_client_store(&path);
        assert!(store.is_available());
        store.set_automatic_scrolling(true);
        assert!(store.toggle_use_direct_app_links());
    }

    let store = open_client_store(&path);
    let options = store.options();
    assert!(options.automatic_scrolling);
    assert!(options.use_direct_app_links);
}

#[test]
fn test_downloaded_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let mut store = open_client_store(&path);
        assert!(store.mark_downloaded("_IMG_a.jpg"));
        assert!(!store.mark_downloaded("_IMG_a.jpg"));
        assert!(store.mark_downloaded("_IMG_b.jpg"));
    }

    let store = open_client_store(&path);
    assert!(store.is_downloaded("_IMG_a.jpg"));
    assert!(store.is_downloaded("_IMG_b.jpg"));
    assert_eq!(store.downloaded().len(), 2);
}

#[test]
fn test_two_handles_keep_each_others_downloads() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    // watch と pull/download が同じファイルを同時に使う状況
    let mut watcher = open_client_store(&path);
    let mut other = open_client_store(&path);

    assert!(other.mark_downloaded("_IMG_x.jpg"));
    assert!(watcher.is_downloaded("_IMG_x.jpg"));

    assert!(watcher.mark_downloaded("_IMG_y.jpg"));
    other.set_automatic_scrolling(true);
    assert!(watcher.options().automatic_scrolling);

    let reopened = open_client_store(&path);
    let downloaded = reopened.downloaded();
    let ids: Vec<&str> = downloaded.iter().collect();
    assert_eq!(ids, vec!["_IMG_x.jpg", "_IMG_y.jpg"]);
}

#[test]
fn test_clear_is_seen_by_other_handle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut first = open_client_store(&path);
    let mut second = open_client_store(&path);
    first.mark_downloaded("_IMG_a.jpg");

    second.clear();
    assert!(!first.is_downloaded("_IMG_a.jpg"));
    assert!(first.mark_downloaded("_IMG_a.jpg"));
}

#[test]
fn test_storage_file_uses_known_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = open_client_store(&path);
    store.set_automatic_scrolling(true);
    store.mark_downloaded("_IMG_a.jpg");

    let content = std::fs::read_to_string(&path).expect("読み込み失敗");
    let raw: serde_json::Value = serde_json::from_str(&content).expect("JSONパース失敗");
    assert_eq!(raw["OptionAutomaticScrolling"], "true");
    assert_eq!(raw["ListOfDownloadedJpegFiles"], "[\"_IMG_a.jpg\"]");
}

#[test]
fn test_clear_resets_to_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = open_client_store(&path);
    store.set_use_direct_app_links(true);
    store.mark_downloaded("_IMG_a.jpg");

    let reload = store.clear();
    assert_eq!(reload.delay.as_millis(), 100);

    let reopened = open_client_store(&path);
    assert!(!reopened.options().use_direct_app_links);
    assert!(reopened.downloaded().is_empty());
}

// ============================================
// 異常系
// ============================================

#[test]
fn test_corrupt_file_reads_as_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json at all").expect("書き込み失敗");

    let store = FileStore::open(&path).expect("オープン失敗");
    let client_store = ClientStore::new(store);
    assert!(!client_store.options().automatic_scrolling);
    assert!(client_store.downloaded().is_empty());
}

#[test]
fn test_unopenable_path_falls_back_to_unavailable() {
    let dir = tempdir().expect("Failed to create temp dir");
    // 親がファイルなのでディレクトリを作れない
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").expect("書き込み失敗");

    let mut store = open_client_store(&blocker.join("storage.json"));
    assert!(!store.is_available());
    assert!(!store.mark_downloaded("_IMG_a.jpg"));
    assert!(!store.options().automatic_scrolling);
}

// ============================================
// セッションとの連携
// ============================================

#[test]
fn test_download_marks_persist_into_next_session() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let mut session = FeedSession::new(open_client_store(&path), PollConfig::default());
        session.apply_snapshot(snapshot(2, &["b.jpg", "a.jpg"]));
        session.store_mut().mark_downloaded("_IMG_a.jpg");
    }

    // 新しいプロセス相当: 台帳は空から、ストアはファイルから
    let mut session = FeedSession::new(open_client_store(&path), PollConfig::default());
    let events = session.apply_snapshot(snapshot(2, &["b.jpg", "a.jpg"]));

    let images = events
        .iter()
        .find_map(|event| match event {
            FeedEvent::ImagesArrived(images) => Some(images.clone()),
            _ => None,
        })
        .expect("新着画像イベントがない");

    let marks: Vec<(&str, bool)> = images.iter().map(|i| (i.name(), i.downloaded)).collect();
    assert_eq!(marks, vec![("a.jpg", true), ("b.jpg", false)]);
}

#[test]
fn test_config_roundtrip_through_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        server_url: "http://camera.local:8888/".into(),
        short_poll_ms: 250,
        long_poll_ms: 10_000,
        download_dir: Some(dir.path().join("photos")),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.server_url, "http://camera.local:8888/");
    assert_eq!(loaded.download_dir(), dir.path().join("photos"));

    let poll = loaded.poll_config();
    assert_eq!(poll.short_interval.as_millis(), 250);
    assert_eq!(poll.long_interval.as_millis(), 10_000);
}

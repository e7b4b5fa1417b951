//! 永続クライアントストア
//!
//! オプションとダウンロード済み画像IDをキー/値ストレージに保存する。
//! ストレージが使えない環境では読み込みはデフォルト値、書き込みは何もしない。

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::timing::RELOAD_GRACE_DELAY;

/// 自動スクロールオプション
pub const KEY_AUTOMATIC_SCROLLING: &str = "OptionAutomaticScrolling";
/// 直接アプリリンクオプション
pub const KEY_USE_DIRECT_APP_LINKS: &str = "OptionUseDirectAppLinks";
/// ダウンロード済み画像IDのJSON配列
pub const KEY_DOWNLOADED_FILES: &str = "ListOfDownloadedJpegFiles";

/// キー/値ストレージのバックエンド
///
/// 値はJSONエンコード済みの文字列で、複数キーにまたがるトランザクションは保証しない
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// メモリ上のストア（テスト・フォールバック用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// ユーザーオプション（すべてデフォルト false）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub automatic_scrolling: bool,
    pub use_direct_app_links: bool,
}

/// ダウンロード済み画像ID（追加順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadedSet {
    ids: Vec<String>,
}

impl DownloadedSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }
}

/// 消去後のリロード要求
///
/// 表示側は `delay` 後にメモリ上の状態をすべて破棄して作り直す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadRequest {
    pub delay: std::time::Duration,
}

/// オプションとダウンロード済み集合への型付きアクセス
pub struct ClientStore<S> {
    backend: Option<S>,
}

impl<S: KeyValueStore> ClientStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend: Some(backend) }
    }

    /// ストレージが使えない環境
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn from_option(backend: Option<S>) -> Self {
        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&S> {
        self.backend.as_ref()
    }

    pub fn options(&self) -> Options {
        Options {
            automatic_scrolling: self.read_flag(KEY_AUTOMATIC_SCROLLING),
            use_direct_app_links: self.read_flag(KEY_USE_DIRECT_APP_LINKS),
        }
    }

    pub fn set_automatic_scrolling(&mut self, enabled: bool) {
        self.write_json(KEY_AUTOMATIC_SCROLLING, &enabled);
    }

    pub fn set_use_direct_app_links(&mut self, enabled: bool) {
        self.write_json(KEY_USE_DIRECT_APP_LINKS, &enabled);
    }

    /// 自動スクロールを反転して新しい値を返す
    pub fn toggle_automatic_scrolling(&mut self) -> bool {
        let enabled = !self.options().automatic_scrolling;
        self.set_automatic_scrolling(enabled);
        enabled
    }

    /// 直接アプリリンクを反転して新しい値を返す
    pub fn toggle_use_direct_app_links(&mut self) -> bool {
        let enabled = !self.options().use_direct_app_links;
        self.set_use_direct_app_links(enabled);
        enabled
    }

    pub fn downloaded(&self) -> DownloadedSet {
        DownloadedSet {
            ids: self.read_json::<Vec<String>>(KEY_DOWNLOADED_FILES).unwrap_or_default(),
        }
    }

    pub fn is_downloaded(&self, id: &str) -> bool {
        self.downloaded().contains(id)
    }

    /// ダウンロード済みとして記録（記録済みなら false）
    pub fn mark_downloaded(&mut self, id: &str) -> bool {
        if !self.is_available() {
            return false;
        }
        let mut set = self.downloaded();
        if !set.insert(id) {
            return false;
        }
        self.write_json(KEY_DOWNLOADED_FILES, &set.ids);
        true
    }

    /// すべて消去してリロードを要求する
    pub fn clear(&mut self) -> ReloadRequest {
        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.clear() {
                warn!(error = %e, "failed to clear client storage");
            }
        }
        ReloadRequest { delay: RELOAD_GRACE_DELAY }
    }

    fn read_flag(&self, key: &str) -> bool {
        self.read_json::<bool>(key).unwrap_or(false)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.as_ref()?.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "ignoring unreadable stored value");
                None
            }
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        let result = serde_json::to_string(value)
            .map_err(Error::from)
            .and_then(|raw| backend.set(key, &raw));
        if let Err(e) = result {
            warn!(key, error = %e, "failed to persist value");
        }
    }
}

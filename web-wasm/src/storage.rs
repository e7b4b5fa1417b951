//! localStorage バックエンド

use picture_streamer_common::{ClientStore, Error, KeyValueStore, Result};
use web_sys::Storage;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// localStorage が使えない環境（プライベートモード等）では None
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| Error::Storage(format!("failed to persist {}", key)))
    }

    fn clear(&mut self) -> Result<()> {
        self.storage
            .clear()
            .map_err(|_| Error::Storage("failed to clear local storage".to_string()))
    }
}

/// 毎回 localStorage を読み直すので、複数のハンドルが同じ内容を見る
pub fn open_client_store() -> ClientStore<LocalStorage> {
    ClientStore::from_option(LocalStorage::open())
}

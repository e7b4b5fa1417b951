//! JSONファイルによるキー/値ストア
//!
//! ブラウザの localStorage と同じく、文字列値のフラットなマップを1ファイルに保存する。

use crate::error::Result;
use picture_streamer_common::{ClientStore, Error as FeedError, KeyValueStore};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// localStorage と同じく、読み書きのたびにファイルを読み直す
///
/// 同じファイルを使う別プロセス（`watch` と `pull` など）の書き込みを失わない。
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// ストアを開く（保存先フォルダがなければ作る）
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// 現在のファイル内容（なければ空、壊れていれば空として扱う）
    fn load(&self) -> BTreeMap<String, String> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "storage file unreadable");
                return BTreeMap::new();
            }
        };

        serde_json::from_reader(BufReader::new(file)).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "storage file corrupt, reading as empty");
            BTreeMap::new()
        })
    }

    /// 一時ファイルに書いてから置き換える（読み手が書きかけの内容を見ない）
    fn save(&self, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp, &self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> picture_streamer_common::Result<()> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).map_err(|e| FeedError::Storage(e.to_string()))
    }

    fn clear(&mut self) -> picture_streamer_common::Result<()> {
        self.save(&BTreeMap::new())
            .map_err(|e| FeedError::Storage(e.to_string()))
    }
}

/// クライアントストアを開く
///
/// 開けない場合はメモリ上のデフォルト値だけで動作する
pub fn open_client_store(path: &Path) -> ClientStore<FileStore> {
    match FileStore::open(path) {
        Ok(store) => ClientStore::new(store),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "client storage unavailable");
            ClientStore::unavailable()
        }
    }
}

use crate::error::{Result, ViewerError};
use picture_streamer_common::{PollConfig, ServerOrigin};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// サーバーURLを上書きする環境変数
pub const SERVER_ENV: &str = "PICTURE_STREAMER_SERVER";

const CONFIG_FILE_NAME: &str = "config.json";
const STORAGE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub short_poll_ms: u64,
    pub long_poll_ms: u64,
    pub download_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let poll = PollConfig::default();
        Self {
            server_url: "http://localhost:8888/".into(),
            short_poll_ms: poll.short_interval.as_millis() as u64,
            long_poll_ms: poll.long_interval.as_millis() as u64,
            download_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// ~/.config/picture-streamer
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ViewerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("picture-streamer"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// オプション・ダウンロード済み集合の保存先
    pub fn storage_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(STORAGE_FILE_NAME))
    }

    /// 接続先（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_server(&self, cli_override: Option<&str>) -> Result<ServerOrigin> {
        let url = cli_override
            .map(str::to_string)
            .or_else(|| std::env::var(SERVER_ENV).ok())
            .unwrap_or_else(|| self.server_url.clone());

        ServerOrigin::parse(&url).map_err(|_| ViewerError::InvalidServerUrl(url))
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        ServerOrigin::parse(&url).map_err(|_| ViewerError::InvalidServerUrl(url.clone()))?;
        self.server_url = url;
        self.save()
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig::from_millis(self.short_poll_ms, self.long_poll_ms)
    }

    /// 写真の保存先（未設定ならOSのダウンロードフォルダ）
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

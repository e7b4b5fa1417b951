//! Picture Streamer サーバーへのHTTPアクセス
//!
//! - data.json: フィード取得（`FeedTransport` 実装）
//! - shutdown.api: 再起動・シャットダウン
//! - photo/<name>: 写真のダウンロード

use crate::error::{Result, ViewerError};
use picture_streamer_common::control::CONTROL_PATH;
use picture_streamer_common::links::photo_path;
use picture_streamer_common::{
    feed_query, ControlCommand, ControlResponse, Error as FeedError, FeedSnapshot,
    FeedTransport, ServerOrigin,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("pstream/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient {
    client: Client,
    origin: ServerOrigin,
}

impl HttpClient {
    /// タイムアウトは設定しない（サーバー側が最大21秒のロングポーリングを行う）
    pub fn new(origin: ServerOrigin) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &ServerOrigin {
        &self.origin
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin.base_url(), path)
    }

    /// フィードを1回取得
    pub async fn fetch_snapshot(&self, count: u64) -> Result<FeedSnapshot> {
        let response = self.client.get(self.url(&feed_query(count))).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()).into());
        }
        let body = response.text().await?;
        Ok(FeedSnapshot::from_json(&body)?)
    }

    /// 制御コマンドを送信
    pub async fn send_control(&self, command: ControlCommand) -> Result<ControlResponse> {
        info!(command = command.as_str(), server = %self.origin.authority(), "sending control command");
        let response = self
            .client
            .post(self.url(CONTROL_PATH))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(command.form_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::UnexpectedStatus(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(ControlResponse::parse(&body))
    }

    /// 写真を `dir` にダウンロードして保存先を返す
    pub async fn download_photo(&self, name: &str, dir: &Path) -> Result<PathBuf> {
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| ViewerError::ImageNotFound(name.to_string()))?;

        let response = self.client.get(self.url(&photo_path(name))).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(ViewerError::ImageNotFound(name.to_string())),
            status if !status.is_success() => {
                return Err(ViewerError::UnexpectedStatus(status.as_u16()))
            }
            _ => {}
        }

        let bytes = response.bytes().await?;
        tokio::fs::create_dir_all(dir).await?;
        let target = dir.join(file_name);
        tokio::fs::write(&target, &bytes).await?;
        debug!(name, bytes = bytes.len(), path = %target.display(), "photo saved");
        Ok(target)
    }
}

impl FeedTransport for HttpClient {
    async fn fetch(&self, count: u64) -> picture_streamer_common::Result<FeedSnapshot> {
        self.fetch_snapshot(count).await.map_err(|e| match e {
            ViewerError::Feed(inner) => inner,
            other => FeedError::Transport(other.to_string()),
        })
    }
}

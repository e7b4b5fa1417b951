//! エラー型定義

use thiserror::Error;

/// 同期エンジン共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// ポーリングのリトライ対象か
    ///
    /// フィード取得で起きうるエラーはすべて一時的な障害として扱う
    pub fn is_transient(&self) -> bool {
        !matches!(self, Error::Storage(_) | Error::InvalidUrl(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

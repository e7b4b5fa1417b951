use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("サーバーURLが不正です: {0}")]
    InvalidServerUrl(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーが予期しないステータスを返しました: {0}")]
    UnexpectedStatus(u16),

    #[error("画像が見つかりません: {0}")]
    ImageNotFound(String),

    #[error("フィードエラー: {0}")]
    Feed(#[from] picture_streamer_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

//! フィードの型定義
//!
//! サーバー（data.json）とクライアントで共有される型:
//! - FeedSnapshot: 1回のポーリング応答
//! - ImageDescriptor: サーバーが報告する画像
//! - NewImage: 照合後に描画対象となった画像

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// ダウンロード済み集合・DOM要素IDに使う接頭辞
pub const PICTURE_ID_PREFIX: &str = "_IMG_";

/// サーバーが報告する画像（ファイル名由来の一意な名前）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageDescriptor {
    pub name: String,
}

impl ImageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 一意な画像ID（ファイル名から決定的に導出）
    pub fn unique_id(&self) -> String {
        format!("{}{}", PICTURE_ID_PREFIX, self.name)
    }
}

/// サーバー通知
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    Reboot,
    Shutdown,
}

impl Notification {
    /// トーストに表示するメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Reboot => "Server is going to reboot now!",
            Notification::Shutdown => "Server is going to shutdown now!",
        }
    }
}

/// data.json の応答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub image_counter: u64,

    /// 前回カウンタ以降の画像（新しい順）
    pub image_list: Vec<ImageDescriptor>,

    /// ワイヤ上は 0|1
    #[serde(deserialize_with = "deserialize_flag", serialize_with = "serialize_flag")]
    pub is_camera_connected: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl FeedSnapshot {
    /// 応答本文をパース
    ///
    /// 必須フィールドの欠落・型違いはすべて `MalformedSnapshot` になる
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::MalformedSnapshot(e.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireFlag {
    Int(i64),
    Bool(bool),
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match WireFlag::deserialize(deserializer)? {
        WireFlag::Int(value) => value == 1,
        WireFlag::Bool(value) => value,
    })
}

fn serialize_flag<S>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

/// 照合で新たに追加された画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub descriptor: ImageDescriptor,
    pub id: String,
    /// 以前のセッションでダウンロード済みか
    pub downloaded: bool,
}

impl NewImage {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

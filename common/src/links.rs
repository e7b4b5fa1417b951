//! 画像リンク生成
//!
//! サーバーオリジンと、写真・サムネイル・モバイルアプリ向け直接リンクのURL

use crate::error::{Error, Result};

pub const PHOTO_FOLDER: &str = "photo";
pub const THUMBNAIL_FOLDER: &str = "thumb";

/// 画像ビューアアプリに渡すためのカスタムスキーム
pub const DIRECT_APP_LINK_PROTOCOL: &str = "http-image-jpeg://";

/// サーバーのオリジン（スキーム・ホスト・ポート）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOrigin {
    /// "http:" のようにコロン付き
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl ServerOrigin {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// "http://host:8888/" 形式のURLからオリジンを取り出す
    ///
    /// IPv6 は "http://[::1]:8888/" のように角括弧で囲む。host は括弧込みで保持する
    pub fn parse(url: &str) -> Result<Self> {
        let invalid = || Error::InvalidUrl(url.to_string());

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if scheme.is_empty() || authority.is_empty() {
            return Err(invalid());
        }

        let (host, port) = match authority.strip_prefix('[') {
            Some(bracketed) => {
                let end = bracketed.find(']').ok_or_else(invalid)?;
                let host = &authority[..end + 2];
                match &bracketed[end + 1..] {
                    "" => (host, None),
                    tail => {
                        let port = tail.strip_prefix(':').ok_or_else(invalid)?;
                        (host, Some(parse_port(port).ok_or_else(invalid)?))
                    }
                }
            }
            None => match authority.rsplit_once(':') {
                Some((host, port)) => (host, Some(parse_port(port).ok_or_else(invalid)?)),
                None => (authority, None),
            },
        };
        if host.is_empty() || host == "[]" {
            return Err(invalid());
        }

        Ok(Self::new(format!("{}:", scheme), host, port))
    }

    /// "host" または "host:port"
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// 末尾スラッシュ付きのベースURL
    pub fn base_url(&self) -> String {
        format!("{}//{}/", self.scheme, self.authority())
    }

    /// 写真へのリンク（直接アプリリンクモードならカスタムスキーム）
    pub fn photo_link(&self, name: &str, use_direct_app_links: bool) -> String {
        if use_direct_app_links {
            format!("{}{}/{}", DIRECT_APP_LINK_PROTOCOL, self.authority(), photo_path(name))
        } else {
            format!("{}{}", self.base_url(), photo_path(name))
        }
    }
}

fn parse_port(port: &str) -> Option<u16> {
    port.parse().ok()
}

/// "photo/<name>"
pub fn photo_path(name: &str) -> String {
    format!("{}/{}", PHOTO_FOLDER, name)
}

/// "thumb/<name>"
pub fn thumbnail_path(name: &str) -> String {
    format!("{}/{}", THUMBNAIL_FOLDER, name)
}

//! 制御エンドポイント（shutdown.api）
//!
//! 再起動・シャットダウン要求と、テキスト応答からユーザー向けメッセージへの変換

use std::time::Duration;

use crate::timing::{REBOOT_DISMISS_DELAY, SHUTDOWN_DISMISS_DELAY};

pub const CONTROL_PATH: &str = "shutdown.api";

/// 通信失敗時のメッセージ
pub const NETWORK_ERROR_MESSAGE: &str = "Network error! Please try again later.";

/// 制御コマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Reboot,
    Shutdown,
}

impl ControlCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlCommand::Reboot => "reboot",
            ControlCommand::Shutdown => "shutdown",
        }
    }

    /// application/x-www-form-urlencoded の本文
    pub fn form_body(&self) -> String {
        format!("command={}", self.as_str())
    }
}

/// サーバー応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlResponse {
    Reboot,
    Shutdown,
    AccessDenied,
    OperationNotAvailable,
    Unknown(String),
}

impl ControlResponse {
    pub fn parse(body: &str) -> Self {
        match body.trim() {
            "REBOOT" => ControlResponse::Reboot,
            "SHUTDOWN" => ControlResponse::Shutdown,
            "ACCESS_DENIED" => ControlResponse::AccessDenied,
            "OPERATION_NOT_AVAILABLE" => ControlResponse::OperationNotAvailable,
            other => ControlResponse::Unknown(other.to_string()),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ControlResponse::Reboot => "Reboot running ...",
            ControlResponse::Shutdown => "Shutdown running ...",
            ControlResponse::AccessDenied => "Access denied!",
            ControlResponse::OperationNotAvailable => "This feature is not available!",
            ControlResponse::Unknown(_) => "Unknown error!",
        }
    }

    /// アプリケーションエラーか（リトライはしない）
    pub fn is_error(&self) -> bool {
        !matches!(self, ControlResponse::Reboot | ControlResponse::Shutdown)
    }

    /// 確認ダイアログを自動で閉じるまでの時間
    pub fn dismiss_after(&self) -> Option<Duration> {
        match self {
            ControlResponse::Reboot => Some(REBOOT_DISMISS_DELAY),
            ControlResponse::Shutdown => Some(SHUTDOWN_DISMISS_DELAY),
            _ => None,
        }
    }
}

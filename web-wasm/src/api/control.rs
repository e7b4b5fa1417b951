//! 再起動・シャットダウン

use picture_streamer_common::control::CONTROL_PATH;
use picture_streamer_common::{ControlCommand, ControlResponse, Result};

/// 制御コマンドを送信して応答を解釈する
pub async fn send_control(command: ControlCommand) -> Result<ControlResponse> {
    let body = super::fetch_text("POST", CONTROL_PATH, Some(&command.form_body())).await?;
    Ok(ControlResponse::parse(&body))
}

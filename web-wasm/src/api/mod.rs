//! サーバーAPI（window.fetch）
//!
//! - data.json: フィード取得
//! - shutdown.api: 再起動・シャットダウン

pub mod control;
pub mod feed;

use picture_streamer_common::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 同一オリジンにリクエストを送り、本文をテキストで返す
async fn fetch_text(method: &str, url: &str, form_body: Option<&str>) -> Result<String> {
    let resp = send(method, url, form_body).await.map_err(transport_error)?;
    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let promise = resp.text().map_err(transport_error)?;
    let text = JsFuture::from(promise).await.map_err(transport_error)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))
}

async fn send(method: &str, url: &str, form_body: Option<&str>) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = form_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if form_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/x-www-form-urlencoded")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

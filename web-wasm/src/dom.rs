//! window / document まわりの小さなヘルパー

use gloo::timers::callback::Timeout;
use picture_streamer_common::ServerOrigin;
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// ページを配信しているサーバー（location から組み立てる）
pub fn page_origin() -> ServerOrigin {
    let location = web_sys::window().map(|w| w.location());
    let field = |get: fn(&web_sys::Location) -> Result<String, JsValue>| {
        location.as_ref().and_then(|l| get(l).ok()).unwrap_or_default()
    };

    let scheme = field(web_sys::Location::protocol);
    let host = field(web_sys::Location::hostname);
    let port = field(web_sys::Location::port).parse::<u16>().ok();
    ServerOrigin::new(if scheme.is_empty() { "http:".to_string() } else { scheme }, host, port)
}

pub fn scroll_to_top() {
    scroll_to(0.0);
}

pub fn scroll_to_bottom() {
    let height = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height())
        .unwrap_or(0);
    scroll_to(height as f64);
}

fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            warn!(error = ?e, "reload failed");
        }
    }
}

/// `delay` 後に一度だけ実行
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    Timeout::new(delay.as_millis() as u32, f).forget();
}

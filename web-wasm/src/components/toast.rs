//! 通知トースト

use crate::dom;
use leptos::prelude::*;
use picture_streamer_common::timing::TOAST_DURATION;

/// 表示して一定時間後に消す
pub fn show_toast(set_message: WriteSignal<Option<String>>, message: impl Into<String>) {
    set_message.set(Some(message.into()));
    dom::after(TOAST_DURATION, move || set_message.set(None));
}

#[component]
pub fn Toast(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <div
            id="ToastMessage"
            class=move || if message.get().is_some() { "Toast" } else { "Toast HiddenToast" }
        >
            {move || message.get().unwrap_or_default()}
        </div>
    }
}

//! ヘッダー（接続状態インジケータとメニューボタン）

use leptos::prelude::*;
use picture_streamer_common::LinkState;

#[component]
pub fn Header<FM>(
    network: ReadSignal<LinkState>,
    camera: ReadSignal<LinkState>,
    on_menu: FM,
) -> impl IntoView
where
    FM: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1>"Picture Streamer"</h1>
            <div class="StateList">
                <StateIndicator label="Network" state=network />
                <StateIndicator label="Camera" state=camera />
            </div>
            <button id="OptionMenuButton" class="MenuButton" on:click=move |_| on_menu(())>
                "☰"
            </button>
        </header>
    }
}

/// 片方だけを表示する Connected / Disconnected の対
#[component]
fn StateIndicator(label: &'static str, state: ReadSignal<LinkState>) -> impl IntoView {
    let hidden_unless = move |expected: LinkState| {
        move || {
            if state.get() == expected {
                "StateValue"
            } else {
                "StateValue HiddenValue"
            }
        }
    };

    view! {
        <div class="State">
            <span class="StateLabel">{label}": "</span>
            <span class=hidden_unless(LinkState::Connected)>"connected"</span>
            <span class=hidden_unless(LinkState::Disconnected)>"disconnected"</span>
        </div>
    }
}

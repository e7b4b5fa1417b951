//! オプションメニュー

use crate::dom;
use crate::storage::open_client_store;
use leptos::prelude::*;
use picture_streamer_common::timing::{LINK_REWRITE_DELAY, MENU_CLOSE_DELAY};

#[component]
pub fn OptionMenu<FS>(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    auto_scroll: ReadSignal<bool>,
    set_auto_scroll: WriteSignal<bool>,
    direct_links: ReadSignal<bool>,
    set_direct_links: WriteSignal<bool>,
    /// localStorage が使えるときだけ消去項目を出す
    storage_available: bool,
    on_shutdown: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let close = move || dom::after(MENU_CLOSE_DELAY, move || set_open.set(false));

    let on_scroll_top = move |_| {
        dom::scroll_to_top();
        close();
    };
    let on_scroll_bottom = move |_| {
        dom::scroll_to_bottom();
        close();
    };
    let on_toggle_auto_scroll = move |_| {
        let enabled = !auto_scroll.get_untracked();
        open_client_store().set_automatic_scrolling(enabled);
        set_auto_scroll.set(enabled);
        if enabled {
            dom::scroll_to_bottom();
        }
        close();
    };
    let on_toggle_direct_links = move |_| {
        let enabled = !direct_links.get_untracked();
        open_client_store().set_use_direct_app_links(enabled);
        dom::after(LINK_REWRITE_DELAY, move || set_direct_links.set(enabled));
        close();
    };
    let on_clear_storage = move |_| {
        let reload = open_client_store().clear();
        dom::after(reload.delay, dom::reload_page);
        close();
    };

    view! {
        <Show when=move || open.get()>
            <div id="OptionMenu" class="Menu">
                <div class="MenuEntry" on:click=on_scroll_top>"Scroll to top"</div>
                <div class="MenuEntry" on:click=on_scroll_bottom>"Scroll to bottom"</div>
                <div class="MenuEntry" on:click=on_toggle_auto_scroll>
                    {move || {
                        if auto_scroll.get() {
                            "Disable automatic scrolling"
                        } else {
                            "Enable automatic scrolling"
                        }
                    }}
                </div>
                <div class="MenuEntry" on:click=on_toggle_direct_links>
                    {move || if direct_links.get() { "Use normal links" } else { "Use direct app links" }}
                </div>
                <Show when=move || storage_available>
                    <div class="MenuEntry" on:click=on_clear_storage>"Clear local storage"</div>
                </Show>
                <div
                    class="MenuEntry"
                    on:click={
                        let on_shutdown = on_shutdown.clone();
                        move |_| {
                            on_shutdown(());
                            close();
                        }
                    }
                >
                    "Shutdown server"
                </div>
            </div>
        </Show>
    }
}

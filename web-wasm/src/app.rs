//! メインアプリケーションコンポーネント

use crate::api::feed::WebFeedTransport;
use crate::components::{
    header::Header,
    option_menu::OptionMenu,
    shutdown_dialog::ShutdownDialog,
    thumbnail_list::ThumbnailList,
    toast::Toast,
};
use crate::dom;
use crate::render::{SignalRenderer, Thumbnail};
use crate::storage::open_client_store;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use picture_streamer_common::{FeedSession, LinkState, PollConfig};
use tracing::{info, warn};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let store = open_client_store();
    let options = store.options();
    let storage_available = store.is_available();
    if !storage_available {
        warn!("local storage is unavailable, options and downloads are not persisted");
    }

    // 接続状態
    let (network, set_network) = signal(LinkState::Disconnected);
    let (camera, set_camera) = signal(LinkState::Disconnected);

    // 表示内容
    let (thumbnails, set_thumbnails) = signal(Vec::<Thumbnail>::new());
    let (toast, set_toast) = signal(None::<String>);

    // オプション
    let (auto_scroll, set_auto_scroll) = signal(options.automatic_scrolling);
    let (direct_links, set_direct_links) = signal(options.use_direct_app_links);

    let (menu_open, set_menu_open) = signal(false);
    let (dialog_open, set_dialog_open) = signal(false);

    let mut renderer = SignalRenderer {
        network: set_network,
        camera: set_camera,
        thumbnails: set_thumbnails,
        toast: set_toast,
        auto_scroll,
    };

    // ページが閉じられるまでポーリングを続ける
    spawn_local(async move {
        let mut session = FeedSession::new(store, PollConfig::default());
        info!(server = %dom::page_origin().authority(), "picture streamer viewer started");
        session
            .run(&WebFeedTransport, &mut renderer, |delay| {
                TimeoutFuture::new(delay.as_millis() as u32)
            })
            .await;
    });

    let on_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let on_shutdown = move |_| set_dialog_open.set(true);

    view! {
        <div class="container">
            <Header network=network camera=camera on_menu=on_menu />

            <OptionMenu
                open=menu_open
                set_open=set_menu_open
                auto_scroll=auto_scroll
                set_auto_scroll=set_auto_scroll
                direct_links=direct_links
                set_direct_links=set_direct_links
                storage_available=storage_available
                on_shutdown=on_shutdown
            />

            <ThumbnailList thumbnails=thumbnails direct_links=direct_links origin=dom::page_origin() />

            <Toast message=toast />

            <Show when=move || dialog_open.get()>
                <ShutdownDialog set_open=set_dialog_open />
            </Show>
        </div>
    }
}

//! サムネイル一覧

use crate::render::Thumbnail;
use crate::storage::open_client_store;
use leptos::prelude::*;
use picture_streamer_common::links::thumbnail_path;
use picture_streamer_common::ServerOrigin;

#[component]
pub fn ThumbnailList(
    thumbnails: ReadSignal<Vec<Thumbnail>>,
    direct_links: ReadSignal<bool>,
    origin: ServerOrigin,
) -> impl IntoView {
    view! {
        <div id="ThumbnailList" class="ThumbnailList">
            <For
                each=move || thumbnails.get()
                key=|thumbnail| thumbnail.id.clone()
                children=move |thumbnail| {
                    view! {
                        <ThumbnailFrame
                            thumbnail=thumbnail
                            direct_links=direct_links
                            origin=origin.clone()
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn ThumbnailFrame(
    thumbnail: Thumbnail,
    direct_links: ReadSignal<bool>,
    origin: ServerOrigin,
) -> impl IntoView {
    let Thumbnail { id, name, downloaded, revealed } = thumbnail;

    // オプション切り替えで既存のリンクも書き換わる
    let href = {
        let name = name.clone();
        move || origin.photo_link(&name, direct_links.get())
    };
    let class = move || {
        let mut class = String::from("Thumbnail");
        if !revealed.get() {
            class.push_str(" Minimized");
        }
        if downloaded.get() {
            class.push_str(" Downloaded");
        }
        class
    };
    let on_click = {
        let id = id.clone();
        move |_| {
            if !downloaded.get_untracked() {
                downloaded.set(true);
                open_client_store().mark_downloaded(&id);
            }
        }
    };

    view! {
        <div class="ThumbnailFrame">
            <div class="Thumbnail">
                <a id=id class=class href=href on:click=on_click>
                    <img class="Thumbnail" src=thumbnail_path(&name) alt=name.clone() />
                    <div class="ThumbnailText">{name}</div>
                </a>
            </div>
        </div>
    }
}

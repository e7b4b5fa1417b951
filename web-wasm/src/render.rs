//! FeedEvent をシグナルに反映する描画アダプタ

use crate::components::toast::show_toast;
use crate::dom;
use leptos::prelude::*;
use picture_streamer_common::timing::{AUTO_SCROLL_DELAY, THUMBNAIL_REVEAL_DELAY};
use picture_streamer_common::{FeedEvent, LinkState, NewImage, RenderAdapter};

/// サムネイル1枚分の表示状態
#[derive(Clone)]
pub struct Thumbnail {
    /// "_IMG_<name>"
    pub id: String,
    pub name: String,
    pub downloaded: RwSignal<bool>,
    /// 追加直後は縮小表示、少し遅れて通常表示にする
    pub revealed: RwSignal<bool>,
}

impl From<&NewImage> for Thumbnail {
    fn from(image: &NewImage) -> Self {
        Self {
            id: image.id.clone(),
            name: image.name().to_string(),
            downloaded: RwSignal::new(image.downloaded),
            revealed: RwSignal::new(false),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SignalRenderer {
    pub network: WriteSignal<LinkState>,
    pub camera: WriteSignal<LinkState>,
    pub thumbnails: WriteSignal<Vec<Thumbnail>>,
    pub toast: WriteSignal<Option<String>>,
    pub auto_scroll: ReadSignal<bool>,
}

impl RenderAdapter for SignalRenderer {
    fn render(&mut self, event: &FeedEvent) {
        match event {
            FeedEvent::NetworkChanged(state) => self.network.set(*state),
            FeedEvent::CameraChanged(state) => self.camera.set(*state),
            FeedEvent::Notification(notification) => {
                show_toast(self.toast, notification.message());
            }
            FeedEvent::ImagesArrived(images) => {
                let added: Vec<Thumbnail> = images.iter().map(Thumbnail::from).collect();
                let reveal: Vec<RwSignal<bool>> = added.iter().map(|t| t.revealed).collect();
                self.thumbnails.update(|list| list.extend(added));

                dom::after(THUMBNAIL_REVEAL_DELAY, move || {
                    for revealed in reveal {
                        revealed.set(true);
                    }
                });
                if self.auto_scroll.get_untracked() {
                    dom::after(AUTO_SCROLL_DELAY, dom::scroll_to_bottom);
                }
            }
        }
    }
}

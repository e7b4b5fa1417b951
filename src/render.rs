//! 端末への描画
//!
//! コアの `FeedEvent` を1行ずつ出力する。オートスクロールは端末では常に有効なので、
//! オプションのうち使うのは直接アプリリンクだけ。

use chrono::Local;
use picture_streamer_common::{FeedEvent, LinkState, NewImage, Options, RenderAdapter, ServerOrigin};
use std::io::Write;
use tracing::warn;

pub struct TerminalRenderer<W: Write> {
    out: W,
    origin: ServerOrigin,
    options: Options,
    rendered: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, origin: ServerOrigin, options: Options) -> Self {
        Self {
            out,
            origin,
            options,
            rendered: 0,
        }
    }

    /// これまでに描画した画像数
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let stamp = Local::now().format("%H:%M:%S");
        if let Err(e) = writeln!(self.out, "[{}] {}", stamp, text) {
            warn!(error = %e, "failed to write to terminal");
        }
    }

    fn image_line(&self, image: &NewImage) -> String {
        let link = self.origin.photo_link(image.name(), self.options.use_direct_app_links);
        let marker = if image.downloaded { "✔" } else { "+" };
        format!("{} {}  {}", marker, image.name(), link)
    }
}

fn state_label(state: LinkState) -> &'static str {
    match state {
        LinkState::Connected => "connected",
        LinkState::Disconnected => "disconnected",
    }
}

impl<W: Write> RenderAdapter for TerminalRenderer<W> {
    fn render(&mut self, event: &FeedEvent) {
        match event {
            FeedEvent::NetworkChanged(state) => {
                let text = format!("network: {}", state_label(*state));
                self.line(&text);
            }
            FeedEvent::CameraChanged(state) => {
                let text = format!("camera: {}", state_label(*state));
                self.line(&text);
            }
            FeedEvent::ImagesArrived(images) => {
                for image in images {
                    let text = self.image_line(image);
                    self.line(&text);
                }
                self.rendered += images.len();
            }
            FeedEvent::Notification(notification) => {
                let text = format!("! {}", notification.message());
                self.line(&text);
            }
        }
    }
}

//! フィード取得

use picture_streamer_common::{feed_query, FeedSnapshot, FeedTransport, Result};

/// ページと同じオリジンの data.json を読む
#[derive(Debug, Clone, Copy, Default)]
pub struct WebFeedTransport;

impl FeedTransport for WebFeedTransport {
    async fn fetch(&self, count: u64) -> Result<FeedSnapshot> {
        let body = super::fetch_text("GET", &feed_query(count), None).await?;
        FeedSnapshot::from_json(&body)
    }
}

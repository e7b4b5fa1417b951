//! フィードポーラー
//!
//! data.json を1件ずつ取得する。成功後は短い間隔、失敗後は長い間隔で次を予約する
//! （2段階の固定バックオフ）。

use std::time::Duration;

use crate::error::Result;
use crate::timing::{LONG_POLL_INTERVAL, SHORT_POLL_INTERVAL};
use crate::types::FeedSnapshot;

/// フィードエンドポイント（サーバールートからの相対パス）
pub const FEED_PATH: &str = "data.json";

/// `data.json?count=<counter>`
pub fn feed_query(count: u64) -> String {
    format!("{}?count={}", FEED_PATH, count)
}

/// フィード取得の実装（reqwest / window.fetch）
///
/// 非2xx・パース失敗も `Err` として返すこと
#[allow(async_fn_in_trait)]
pub trait FeedTransport {
    async fn fetch(&self, count: u64) -> Result<FeedSnapshot>;
}

/// 1回のポーリング結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Success,
    Failure,
}

/// ポーリング間隔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub short_interval: Duration,
    pub long_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            short_interval: SHORT_POLL_INTERVAL,
            long_interval: LONG_POLL_INTERVAL,
        }
    }
}

impl PollConfig {
    pub fn from_millis(short_ms: u64, long_ms: u64) -> Self {
        Self {
            short_interval: Duration::from_millis(short_ms),
            long_interval: Duration::from_millis(long_ms),
        }
    }

    /// 次回ポーリングまでの待ち時間
    pub fn delay_after(&self, outcome: PollOutcome) -> Duration {
        match outcome {
            PollOutcome::Success => self.short_interval,
            PollOutcome::Failure => self.long_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_query() {
        assert_eq!(feed_query(0), "data.json?count=0");
        assert_eq!(feed_query(42), "data.json?count=42");
    }

    #[test]
    fn test_default_intervals() {
        let config = PollConfig::default();
        assert_eq!(config.delay_after(PollOutcome::Success), Duration::from_millis(100));
        assert_eq!(config.delay_after(PollOutcome::Failure), Duration::from_millis(5000));
    }

    #[test]
    fn test_custom_intervals() {
        let config = PollConfig::from_millis(250, 10_000);
        assert_eq!(config.delay_after(PollOutcome::Success), Duration::from_millis(250));
        assert_eq!(config.delay_after(PollOutcome::Failure), Duration::from_secs(10));
    }
}

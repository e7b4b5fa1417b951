//! 接続状態トラッカー
//!
//! ネットワークとカメラの2チャネルを独立に管理する。
//! 状態が変わったとき（エッジ）だけイベントを返し、同じ状態の再通知は無視する。

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// 接続状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkState {
    Connected,
    #[default]
    Disconnected,
}

impl LinkState {
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            LinkState::Connected
        } else {
            LinkState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkState::Connected => "connected",
            LinkState::Disconnected => "disconnected",
        }
    }
}

/// チャネル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Network,
    Camera,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Network => "network",
            Channel::Camera => "camera",
        }
    }
}

/// 状態遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityChange {
    pub channel: Channel,
    pub state: LinkState,
}

/// 2チャネルの接続状態（初期状態はどちらも切断）
#[derive(Debug, Clone, Default)]
pub struct ConnectivityTracker {
    network: LinkState,
    camera: LinkState,
}

impl ConnectivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network(&self) -> LinkState {
        self.network
    }

    pub fn camera(&self) -> LinkState {
        self.camera
    }

    /// ネットワーク状態を更新し、遷移があれば返す
    pub fn update_network(&mut self, connected: bool) -> Option<ConnectivityChange> {
        let next = LinkState::from_connected(connected);
        Self::transition(&mut self.network, next, Channel::Network)
    }

    /// カメラ状態を更新し、遷移があれば返す
    pub fn update_camera(&mut self, connected: bool) -> Option<ConnectivityChange> {
        let next = LinkState::from_connected(connected);
        Self::transition(&mut self.camera, next, Channel::Camera)
    }

    fn transition(
        current: &mut LinkState,
        next: LinkState,
        channel: Channel,
    ) -> Option<ConnectivityChange> {
        if *current == next {
            return None;
        }
        *current = next;

        match next {
            LinkState::Connected => info!(channel = channel.as_str(), "connection established"),
            LinkState::Disconnected => warn!(channel = channel.as_str(), "connection lost"),
        }

        Some(ConnectivityChange { channel, state: next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_disconnected() {
        let tracker = ConnectivityTracker::new();
        assert_eq!(tracker.network(), LinkState::Disconnected);
        assert_eq!(tracker.camera(), LinkState::Disconnected);
    }

    #[test]
    fn test_camera_connected_twice_emits_once() {
        let mut tracker = ConnectivityTracker::new();

        let first = tracker.update_camera(true);
        let second = tracker.update_camera(true);

        assert_eq!(
            first,
            Some(ConnectivityChange { channel: Channel::Camera, state: LinkState::Connected })
        );
        assert_eq!(second, None);
    }

    #[test]
    fn test_reaffirming_disconnected_is_noop() {
        let mut tracker = ConnectivityTracker::new();
        assert_eq!(tracker.update_network(false), None);
        assert_eq!(tracker.update_camera(false), None);
    }

    #[test]
    fn test_each_edge_emits_once() {
        let mut tracker = ConnectivityTracker::new();
        let sequence = [true, true, false, false, true];

        let changes: Vec<LinkState> = sequence
            .iter()
            .filter_map(|&c| tracker.update_network(c))
            .map(|change| change.state)
            .collect();

        assert_eq!(
            changes,
            vec![LinkState::Connected, LinkState::Disconnected, LinkState::Connected]
        );
    }

    #[test]
    fn test_channels_are_independent() {
        let mut tracker = ConnectivityTracker::new();
        tracker.update_network(true);

        assert!(tracker.network().is_connected());
        assert!(!tracker.camera().is_connected());
        assert!(tracker.update_camera(true).is_some());
    }
}

//! 閲覧セッション
//!
//! 台帳・クライアントストア・ポーリング間隔を1つにまとめ、
//! `取得 → 照合 → 描画 → 待機` を直列に繰り返す。
//! 照合Nが描画まで終わってから次の取得を始めるため、台帳にロックは不要。

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::connectivity::LinkState;
use crate::error::Error;
use crate::ledger::ClientLedger;
use crate::poller::{FeedTransport, PollConfig, PollOutcome};
use crate::reconciler::reconcile;
use crate::store::{ClientStore, KeyValueStore, ReloadRequest};
use crate::types::{FeedSnapshot, NewImage, Notification};

/// コアから表示側へのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    NetworkChanged(LinkState),
    CameraChanged(LinkState),
    /// 古い順の新着画像
    ImagesArrived(Vec<NewImage>),
    Notification(Notification),
}

/// 表示側（DOM・端末）
pub trait RenderAdapter {
    fn render(&mut self, event: &FeedEvent);
}

pub struct FeedSession<S> {
    ledger: ClientLedger,
    store: ClientStore<S>,
    config: PollConfig,
}

impl<S: KeyValueStore> FeedSession<S> {
    pub fn new(store: ClientStore<S>, config: PollConfig) -> Self {
        Self {
            ledger: ClientLedger::new(),
            store,
            config,
        }
    }

    pub fn ledger(&self) -> &ClientLedger {
        &self.ledger
    }

    pub fn store(&self) -> &ClientStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ClientStore<S> {
        &mut self.store
    }

    pub fn config(&self) -> PollConfig {
        self.config
    }

    /// 取得成功時の処理（通知 → ネットワーク → カメラ → 画像の順）
    pub fn apply_snapshot(&mut self, snapshot: FeedSnapshot) -> Vec<FeedEvent> {
        let mut events = Vec::new();

        if let Some(notification) = snapshot.notification {
            events.push(FeedEvent::Notification(notification));
        }
        if let Some(change) = self.ledger.connectivity_mut().update_network(true) {
            events.push(FeedEvent::NetworkChanged(change.state));
        }

        let downloaded = self.store.downloaded();
        let result = reconcile(&mut self.ledger, snapshot, &downloaded);

        if let Some(change) = result.camera_change {
            events.push(FeedEvent::CameraChanged(change.state));
        }
        if !result.new_images.is_empty() {
            events.push(FeedEvent::ImagesArrived(result.new_images));
        }
        events
    }

    /// 取得失敗時の処理
    pub fn apply_failure(&mut self, error: &Error) -> Vec<FeedEvent> {
        warn!(error = %error, transient = error.is_transient(), "feed poll failed");
        self.ledger
            .connectivity_mut()
            .update_network(false)
            .map(|change| vec![FeedEvent::NetworkChanged(change.state)])
            .unwrap_or_default()
    }

    /// 1回ポーリングして描画し、次回までの待ち時間を返す
    pub async fn poll_once<T, R>(&mut self, transport: &T, renderer: &mut R) -> Duration
    where
        T: FeedTransport,
        R: RenderAdapter,
    {
        let counter = self.ledger.image_counter();
        debug!(counter, "polling feed");

        let (events, outcome) = match transport.fetch(counter).await {
            Ok(snapshot) => (self.apply_snapshot(snapshot), PollOutcome::Success),
            Err(e) => (self.apply_failure(&e), PollOutcome::Failure),
        };

        for event in &events {
            renderer.render(event);
        }
        self.config.delay_after(outcome)
    }

    /// 永続ループ（終了はページ遷移・プロセス終了のみ）
    pub async fn run<T, R, F, Fut>(&mut self, transport: &T, renderer: &mut R, mut sleep: F)
    where
        T: FeedTransport,
        R: RenderAdapter,
        F: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        loop {
            let delay = self.poll_once(transport, renderer).await;
            sleep(delay).await;
        }
    }

    /// ストレージを消去してリロードを要求
    pub fn clear_storage(&mut self) -> ReloadRequest {
        self.store.clear()
    }

    /// リロード相当: 台帳をデフォルトから作り直す
    pub fn reload(&mut self) {
        self.ledger = ClientLedger::new();
    }
}

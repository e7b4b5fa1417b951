//! 新着写真の監視（端末ビューア本体）

use crate::error::Result;
use crate::render::TerminalRenderer;
use crate::store::FileStore;
use crate::transport::HttpClient;
use picture_streamer_common::{ClientStore, FeedSession, PollConfig};
use tracing::info;

/// Ctrl-C まで poll → reconcile → render を繰り返す
pub async fn watch(client: &HttpClient, store: ClientStore<FileStore>, poll: PollConfig) -> Result<()> {
    let options = store.options();
    let mut session = FeedSession::new(store, poll);
    let mut renderer = TerminalRenderer::new(std::io::stdout(), client.origin().clone(), options);

    info!(
        server = %client.origin().authority(),
        short_ms = poll.short_interval.as_millis() as u64,
        long_ms = poll.long_interval.as_millis() as u64,
        "watching feed"
    );

    tokio::select! {
        _ = session.run(client, &mut renderer, tokio::time::sleep) => {}
        signal = tokio::signal::ctrl_c() => signal?,
    }

    info!(
        counter = session.ledger().image_counter(),
        images = renderer.rendered(),
        "viewer stopped"
    );
    Ok(())
}

//! Picture Streamer Viewer Common Library
//!
//! CLIとWeb(WASM)で共有される同期エンジン:
//! ポーリング → 照合 → 描画イベント、接続状態、永続クライアントストア

pub mod types;
pub mod error;
pub mod timing;
pub mod connectivity;
pub mod ledger;
pub mod store;
pub mod reconciler;
pub mod poller;
pub mod session;
pub mod links;
pub mod control;

pub use types::{FeedSnapshot, ImageDescriptor, NewImage, Notification};
pub use error::{Error, Result};
pub use connectivity::{Channel, ConnectivityChange, ConnectivityTracker, LinkState};
pub use ledger::ClientLedger;
pub use store::{ClientStore, DownloadedSet, KeyValueStore, MemoryStore, Options, ReloadRequest};
pub use reconciler::{reconcile, Reconciliation};
pub use poller::{feed_query, FeedTransport, PollConfig, PollOutcome};
pub use session::{FeedEvent, FeedSession, RenderAdapter};
pub use links::ServerOrigin;
pub use control::{ControlCommand, ControlResponse};

//! Picture Streamer 端末ビューア
//!
//! 同期エンジンは `picture_streamer_common`、ここにはネイティブ環境の実装を置く:
//! reqwest によるHTTP、JSONファイルのストア、端末への描画、CLI

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod render;
pub mod store;
pub mod transport;
pub mod watch;

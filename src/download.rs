//! 写真のダウンロード
//!
//! ダウンロードした写真は「ダウンロード済み」として記録し、
//! 次回以降のセッションでもマーク付きで表示される。

use crate::error::Result;
use crate::transport::HttpClient;
use indicatif::{ProgressBar, ProgressStyle};
use picture_streamer_common::{ClientStore, DownloadedSet, ImageDescriptor, KeyValueStore};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 一括ダウンロードの結果
#[derive(Debug, Default)]
pub struct PullSummary {
    pub downloaded: Vec<PathBuf>,
    pub skipped: usize,
    pub failed: Vec<(String, String)>,
}

/// 未ダウンロードの画像を古い順に抽出
///
/// `images` はサーバーの並び（新しい順）
pub fn pending_images(images: &[ImageDescriptor], downloaded: &DownloadedSet) -> Vec<ImageDescriptor> {
    images
        .iter()
        .rev()
        .filter(|image| !downloaded.contains(&image.unique_id()))
        .cloned()
        .collect()
}

/// 1枚ダウンロードして記録
pub async fn download_one<S: KeyValueStore>(
    client: &HttpClient,
    store: &mut ClientStore<S>,
    name: &str,
    dir: &Path,
) -> Result<PathBuf> {
    let path = client.download_photo(name, dir).await?;
    store.mark_downloaded(&ImageDescriptor::new(name).unique_id());
    Ok(path)
}

/// サーバー上の全画像のうち未ダウンロードのものを取得
pub async fn pull_missing<S: KeyValueStore>(
    client: &HttpClient,
    store: &mut ClientStore<S>,
    dir: &Path,
) -> Result<PullSummary> {
    // count=0 で全リストが返る
    let snapshot = client.fetch_snapshot(0).await?;
    let pending = pending_images(&snapshot.image_list, &store.downloaded());

    let mut summary = PullSummary {
        skipped: snapshot.image_list.len() - pending.len(),
        ..Default::default()
    };
    if pending.is_empty() {
        return Ok(summary);
    }

    let bar = ProgressBar::new(pending.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    for image in &pending {
        bar.set_message(image.name.clone());
        match download_one(client, store, &image.name, dir).await {
            Ok(path) => summary.downloaded.push(path),
            Err(e) => {
                warn!(name = %image.name, error = %e, "download failed");
                summary.failed.push((image.name.clone(), e.to_string()));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use picture_streamer_common::MemoryStore;

    #[test]
    fn test_pending_images_oldest_first_without_downloaded() {
        let mut store = ClientStore::new(MemoryStore::new());
        store.mark_downloaded("_IMG_b.jpg");

        let images: Vec<ImageDescriptor> =
            ["c.jpg", "b.jpg", "a.jpg"].iter().map(|n| ImageDescriptor::new(*n)).collect();
        let pending = pending_images(&images, &store.downloaded());

        let names: Vec<&str> = pending.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
    }
}

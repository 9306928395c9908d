use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::{DownloadError, PlatformDownloader, UrlFetcher};
use crate::domain::{AssetName, MediaAsset, OriginKind};
use crate::infrastructure::storage::{MediaLibrary, StorageError};

/// Gets a playable media asset onto local storage from either a direct
/// upload or a remote URL, and verifies the result before declaring success.
///
/// Every call is independent: re-acquiring the same URL produces a new asset
/// under a new name, never a dedup hit.
pub struct AcquisitionService {
    library: Arc<MediaLibrary>,
    platform_downloader: Arc<dyn PlatformDownloader>,
    url_fetcher: Arc<dyn UrlFetcher>,
}

#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("storage write failed: {0}")]
    StorageWrite(#[from] StorageError),
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),
    #[error("acquired file missing or empty: {0}")]
    AcquisitionFailed(String),
}

impl AcquisitionService {
    pub fn new(
        library: Arc<MediaLibrary>,
        platform_downloader: Arc<dyn PlatformDownloader>,
        url_fetcher: Arc<dyn UrlFetcher>,
    ) -> Self {
        Self {
            library,
            platform_downloader,
            url_fetcher,
        }
    }

    pub async fn acquire_upload(
        &self,
        original_filename: &str,
        data: Bytes,
    ) -> Result<MediaAsset, AcquisitionError> {
        let created_at = Utc::now();
        let filename = AssetName::for_upload(created_at, original_filename);

        tracing::debug!(filename = %filename, bytes = data.len(), "Saving uploaded file");
        let stored_path = self.library.save_video(&filename, data).await?;
        self.verify_acquired(&stored_path).await?;

        tracing::info!(filename = %filename, "Saved uploaded file");
        Ok(MediaAsset {
            filename,
            stored_path,
            origin: OriginKind::Upload,
            created_at,
        })
    }

    pub async fn acquire_url(&self, url: &str) -> Result<MediaAsset, AcquisitionError> {
        let created_at = Utc::now();
        let origin = classify_url(url);
        let filename = match origin {
            OriginKind::YoutubeUrl => AssetName::for_youtube_download(created_at),
            _ => AssetName::for_generic_download(created_at),
        };
        let dest = self.library.video_path(&filename);

        let download = match origin {
            OriginKind::YoutubeUrl => {
                tracing::info!(url = %url, filename = %filename, "Downloading via platform downloader");
                self.platform_downloader.download(url, &dest).await
            }
            _ => {
                tracing::info!(url = %url, filename = %filename, "Downloading via generic fetch");
                self.url_fetcher.fetch_to_path(url, &dest).await
            }
        };

        if let Err(e) = download {
            self.remove_partial(&dest).await;
            return Err(AcquisitionError::Download(e));
        }

        self.verify_acquired(&dest).await?;

        tracing::info!(filename = %filename, origin = %origin, "Downloaded video");
        Ok(MediaAsset {
            filename,
            stored_path: dest,
            origin,
            created_at,
        })
    }

    /// Post-condition for either path: the target file must exist and be
    /// non-empty. A zero-length file is removed so it is never claimed as a
    /// valid asset.
    async fn verify_acquired(&self, path: &Path) -> Result<(), AcquisitionError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|_| AcquisitionError::AcquisitionFailed(path.display().to_string()))?;
        if meta.len() == 0 {
            self.remove_partial(path).await;
            return Err(AcquisitionError::AcquisitionFailed(
                path.display().to_string(),
            ));
        }
        Ok(())
    }

    async fn remove_partial(&self, path: &Path) {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial download");
            }
        }
    }
}

fn classify_url(url: &str) -> OriginKind {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        OriginKind::YoutubeUrl
    } else {
        OriginKind::GenericUrl
    }
}

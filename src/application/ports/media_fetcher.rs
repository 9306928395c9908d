use std::path::Path;

use async_trait::async_trait;

/// Streams the body of an arbitrary URL to a local path.
///
/// Implementations must surface transport failures and non-success HTTP
/// statuses as errors rather than writing an error page to disk.
#[async_trait]
pub trait UrlFetcher: Send + Sync {
    async fn fetch_to_path(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Resolves a video-platform URL and writes a merged audio+video file to the
/// given path, or fails.
#[async_trait]
pub trait PlatformDownloader: Send + Sync {
    async fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("downloader tool failed: {0}")]
    ToolFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

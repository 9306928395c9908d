use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Produces a temporary audio asset from a video asset via the external
/// remux tool.
///
/// Caller contract: the returned path is temporary and must be cleaned up
/// with [`discard_temp_audio`] after use, success or failure.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract_audio(&self, video_path: &Path) -> Result<PathBuf, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("remux tool failed: {0}")]
    ToolFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Removes a temporary audio file. Failure to delete is logged, never
/// propagated.
pub async fn discard_temp_audio(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove temporary audio file");
    }
}

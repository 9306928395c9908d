use std::path::Path;

use async_trait::async_trait;

use crate::domain::SegmentRecord;

use super::ConversionError;

/// A speech-recognition backend. Implementations return an ordered sequence
/// of raw segments; the cue assembler never learns which backend produced
/// its input.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, media_path: &Path) -> Result<Vec<SegmentRecord>, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("audio conversion failed: {0}")]
    Conversion(#[from] ConversionError),
    #[error("transcription backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

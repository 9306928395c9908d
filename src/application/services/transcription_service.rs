use std::sync::Arc;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::domain::{cue_track_name, CueTrackDocument};
use crate::infrastructure::storage::{MediaLibrary, StorageError};

/// Runs one transcription backend over a stored asset and persists the
/// assembled cue track.
///
/// Re-running for the same asset overwrites the previous track; given
/// identical segments the output is byte-identical.
pub struct TranscriptionService {
    library: Arc<MediaLibrary>,
    transcriber: Arc<dyn Transcriber>,
}

#[derive(Debug)]
pub struct TranscriptionOutcome {
    pub track_filename: String,
    pub cue_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("video not found: {0}")]
    AssetNotFound(String),
    #[error(transparent)]
    Transcriber(#[from] TranscriberError),
    #[error("storage write failed: {0}")]
    Storage(#[from] StorageError),
}

impl TranscriptionService {
    pub fn new(library: Arc<MediaLibrary>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            library,
            transcriber,
        }
    }

    pub async fn transcribe_to_track(
        &self,
        video_filename: &str,
    ) -> Result<TranscriptionOutcome, TranscriptionServiceError> {
        if !self.library.video_exists(video_filename).await {
            return Err(TranscriptionServiceError::AssetNotFound(
                video_filename.to_string(),
            ));
        }

        let video_path = self.library.video_path(video_filename);
        tracing::info!(video = %video_filename, "Starting transcription");

        let segments = self.transcriber.transcribe(&video_path).await?;
        let document = CueTrackDocument::assemble(&segments);

        // A transcript with zero valid cues is still a successful, valid
        // document.
        let track_filename = cue_track_name(video_filename);
        self.library
            .write_cue_track(&track_filename, &document.render())
            .await?;

        tracing::info!(
            video = %video_filename,
            track = %track_filename,
            segments = segments.len(),
            cues = document.cues().len(),
            "Cue track written"
        );

        Ok(TranscriptionOutcome {
            track_filename,
            cue_count: document.cues().len(),
        })
    }
}

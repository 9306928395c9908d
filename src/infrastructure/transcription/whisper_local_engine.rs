use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{
    discard_temp_audio, AudioExtractor, Transcriber, TranscriberError,
};
use crate::domain::SegmentRecord;

/// Local whisper backend.
///
/// The model is loaded lazily on first use and cached for the process
/// lifetime; reload-per-request would dominate every transcription. Audio is
/// remuxed to 16 kHz mono PCM first, and inference runs on the blocking
/// pool.
pub struct WhisperLocalEngine {
    model_path: PathBuf,
    extractor: Arc<dyn AudioExtractor>,
    context: OnceCell<Arc<WhisperContext>>,
}

impl WhisperLocalEngine {
    pub fn new(model_path: PathBuf, extractor: Arc<dyn AudioExtractor>) -> Self {
        Self {
            model_path,
            extractor,
            context: OnceCell::new(),
        }
    }

    async fn context(&self) -> Result<Arc<WhisperContext>, TranscriberError> {
        self.context
            .get_or_try_init(|| async {
                let model_path = self.model_path.clone();
                let ctx = tokio::task::spawn_blocking(move || {
                    WhisperContext::new_with_params(
                        &model_path.to_string_lossy(),
                        WhisperContextParameters::default(),
                    )
                })
                .await
                .map_err(|e| TranscriberError::ModelLoadFailed(format!("join: {}", e)))?
                .map_err(|e| TranscriberError::ModelLoadFailed(format!("{:?}", e)))?;

                tracing::info!(model = %self.model_path.display(), "Whisper model loaded");
                Ok(Arc::new(ctx))
            })
            .await
            .cloned()
    }
}

#[async_trait]
impl Transcriber for WhisperLocalEngine {
    async fn transcribe(&self, media_path: &Path) -> Result<Vec<SegmentRecord>, TranscriberError> {
        let audio_path = self.extractor.extract_audio(media_path).await?;
        let result = self.run_inference(&audio_path).await;
        discard_temp_audio(&audio_path).await;
        result
    }
}

impl WhisperLocalEngine {
    async fn run_inference(
        &self,
        audio_path: &Path,
    ) -> Result<Vec<SegmentRecord>, TranscriberError> {
        let ctx = self.context().await?;
        let audio_path = audio_path.to_path_buf();

        let segments = tokio::task::spawn_blocking(move || run_whisper(&ctx, &audio_path))
            .await
            .map_err(|e| TranscriberError::InferenceFailed(format!("join: {}", e)))??;

        tracing::info!(segments = segments.len(), "Local transcription completed");
        Ok(segments)
    }
}

fn run_whisper(
    ctx: &WhisperContext,
    audio_path: &Path,
) -> Result<Vec<SegmentRecord>, TranscriberError> {
    let mut reader = hound::WavReader::open(audio_path)
        .map_err(|e| TranscriberError::InferenceFailed(format!("wav open: {}", e)))?;
    let samples_i16: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TranscriberError::InferenceFailed(format!("wav decode: {}", e)))?;
    let samples_f32: Vec<f32> = samples_i16.iter().map(|&s| s as f32 / 32768.0).collect();

    let mut state = ctx
        .create_state()
        .map_err(|e| TranscriberError::InferenceFailed(format!("create state: {:?}", e)))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_n_threads(4);
    params.set_language(Some("en"));

    state
        .full(params, &samples_f32)
        .map_err(|e| TranscriberError::InferenceFailed(format!("inference: {:?}", e)))?;

    let mut segments = Vec::new();
    let n_segments = state.full_n_segments();
    for i in 0..n_segments {
        let Some(segment) = state.get_segment(i) else {
            continue;
        };
        let Ok(text) = segment.to_str_lossy() else {
            continue;
        };
        // Whisper reports timestamps in centiseconds.
        segments.push(SegmentRecord {
            start: segment.start_timestamp() as f64 / 100.0,
            end: segment.end_timestamp() as f64 / 100.0,
            text: text.to_string(),
        });
    }

    Ok(segments)
}

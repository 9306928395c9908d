use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{
    discard_temp_audio, AudioExtractor, Transcriber, TranscriberError,
};
use crate::domain::SegmentRecord;

/// Remote whisper backend (OpenAI-compatible transcription endpoint).
///
/// Extracts a compressed audio track first, uploads it requesting
/// segment-level timing, and always attempts temp-audio cleanup, success or
/// failure.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    extractor: Arc<dyn AudioExtractor>,
}

#[derive(Deserialize)]
struct VerboseTranscriptionResponse {
    // The response carries more fields (language, duration, full text); only
    // the segment collection matters here.
    segments: Option<Vec<ApiSegment>>,
}

#[derive(Deserialize)]
struct ApiSegment {
    start: f64,
    end: f64,
    text: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        extractor: Arc<dyn AudioExtractor>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            extractor,
        }
    }

    async fn request_segments(
        &self,
        audio_path: &Path,
    ) -> Result<Vec<SegmentRecord>, TranscriberError> {
        let audio_data = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriberError::InferenceFailed(format!("read audio: {}", e)))?;

        let file_part = multipart::Part::bytes(audio_data)
            .file_name("audio.mp3")
            .mime_str("audio/mpeg")
            .map_err(|e| TranscriberError::BackendUnavailable(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        let url = format!("{}/audio/transcriptions", self.base_url);
        tracing::debug!(model = %self.model, "Sending audio to remote Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriberError::BackendUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriberError::BackendUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: VerboseTranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriberError::MalformedResponse(format!("parse response: {}", e)))?;

        let segments = result.segments.ok_or_else(|| {
            TranscriberError::MalformedResponse("response has no segments collection".to_string())
        })?;

        tracing::info!(
            segments = segments.len(),
            "Remote Whisper transcription completed"
        );

        Ok(segments
            .into_iter()
            .map(|s| SegmentRecord {
                start: s.start,
                end: s.end,
                text: s.text,
            })
            .collect())
    }
}

#[async_trait]
impl Transcriber for OpenAiWhisperEngine {
    async fn transcribe(&self, media_path: &Path) -> Result<Vec<SegmentRecord>, TranscriberError> {
        let audio_path = self.extractor.extract_audio(media_path).await?;
        let result = self.request_segments(&audio_path).await;
        discard_temp_audio(&audio_path).await;
        result
    }
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::{TranscriptionService, TranscriptionServiceError};
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    #[serde(rename = "videoFilename")]
    pub video_filename: Option<String>,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    #[serde(rename = "vttPath")]
    pub vtt_path: String,
    #[serde(rename = "videoFile")]
    pub video_file: String,
}

/// `POST /transcribe_video`: local whisper backend.
#[tracing::instrument(skip(state, request))]
pub async fn transcribe_video_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Response {
    let service = Arc::clone(&state.local_transcription);
    run_transcription(&state, service, request).await
}

/// `POST /transcribe_video_api`: remote whisper backend.
#[tracing::instrument(skip(state, request))]
pub async fn transcribe_video_api_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Response {
    let service = Arc::clone(&state.remote_transcription);
    run_transcription(&state, service, request).await
}

async fn run_transcription(
    state: &AppState,
    service: Arc<TranscriptionService>,
    request: TranscribeRequest,
) -> Response {
    let video_filename = match request.video_filename.as_deref() {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => {
            tracing::warn!("Transcription request with no video filename");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No video filename provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    match service.transcribe_to_track(&video_filename).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                vtt_path: format!(
                    "{}/vtt_files/{}",
                    state.public_base_url, outcome.track_filename
                ),
                video_file: format!(
                    "{}/uploaded_videos/{}",
                    state.public_base_url, video_filename
                ),
            }),
        )
            .into_response(),
        Err(TranscriptionServiceError::AssetNotFound(name)) => {
            tracing::warn!(video = %name, "Video file not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Video file not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, video = %video_filename, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Transcription failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}

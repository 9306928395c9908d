use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::CatalogEntry;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<CatalogEntry>,
}

#[derive(Serialize)]
pub struct TranscriptionListResponse {
    pub transcriptions: Vec<CatalogEntry>,
}

/// `GET /list_videos`
pub async fn list_videos_handler(State(state): State<AppState>) -> Response {
    match state.catalog.list_videos().await {
        Ok(videos) => (StatusCode::OK, Json(VideoListResponse { videos })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list videos");
            listing_error()
        }
    }
}

/// `GET /list_transcriptions`
pub async fn list_transcriptions_handler(State(state): State<AppState>) -> Response {
    match state.catalog.list_cue_tracks().await {
        Ok(transcriptions) => (
            StatusCode::OK,
            Json(TranscriptionListResponse { transcriptions }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list transcriptions");
            listing_error()
        }
    }
}

fn listing_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to list files".to_string(),
        }),
    )
        .into_response()
}

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::infrastructure::storage::StorageError;
use crate::presentation::state::AppState;

use super::ErrorResponse;

/// `GET /vtt_files/{filename}`
pub async fn serve_cue_track_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_filename(&filename) {
        return not_found();
    }

    match state.library.read_cue_track(&filename).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "text/vtt")], bytes).into_response(),
        Err(StorageError::NotFound(_)) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Failed to read cue track");
            internal_error()
        }
    }
}

/// `GET /uploaded_videos/{filename}`
pub async fn serve_video_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_filename(&filename) {
        return not_found();
    }

    match state.library.read_video(&filename).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "video/mp4")], bytes).into_response(),
        Err(StorageError::NotFound(_)) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Failed to read video");
            internal_error()
        }
    }
}

/// The store is a flat directory; anything that could walk out of it is
/// treated as absent.
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && name != "." && name != ".."
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "File not found".to_string(),
        }),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to read file".to_string(),
        }),
    )
        .into_response()
}

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    #[serde(rename = "videoFile")]
    pub video_file: String,
    pub filename: String,
}

/// `POST /upload`: multipart body with either a `videoFile` file field or a
/// `videoUrl` text field.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut uploaded: Option<(String, bytes::Bytes)> = None;
    let mut source_url: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        match field.name() {
            Some("videoFile") => {
                let filename = field.file_name().unwrap_or("upload.mp4").to_string();
                match field.bytes().await {
                    Ok(data) => uploaded = Some((filename, data)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Some("videoUrl") => match field.text().await {
                Ok(url) if !url.trim().is_empty() => source_url = Some(url.trim().to_string()),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read url field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read url field: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            _ => {}
        }
    }

    let acquired = if let Some((filename, data)) = uploaded {
        tracing::debug!(filename = %filename, bytes = data.len(), "Processing file upload");
        state.acquisition.acquire_upload(&filename, data).await
    } else if let Some(url) = source_url {
        state.acquisition.acquire_url(&url).await
    } else {
        tracing::warn!("Upload request with no file or URL");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No file or URL provided".to_string(),
            }),
        )
            .into_response();
    };

    match acquired {
        Ok(asset) => (
            StatusCode::OK,
            Json(UploadResponse {
                video_file: format!(
                    "{}/uploaded_videos/{}",
                    state.public_base_url, asset.filename
                ),
                filename: asset.filename,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Acquisition failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to acquire video: {}", e),
                }),
            )
                .into_response()
        }
    }
}

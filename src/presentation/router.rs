use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, list_transcriptions_handler, list_videos_handler, serve_cue_track_handler,
    serve_video_handler, transcribe_video_api_handler, transcribe_video_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .route("/transcribe_video", post(transcribe_video_handler))
        .route("/transcribe_video_api", post(transcribe_video_api_handler))
        .route("/vtt_files/{filename}", get(serve_cue_track_handler))
        .route("/uploaded_videos/{filename}", get(serve_video_handler))
        .route("/list_videos", get(list_videos_handler))
        .route("/list_transcriptions", get(list_transcriptions_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

mod files;
mod health;
mod listings;
mod transcribe;
mod upload;

use serde::Serialize;

pub use files::{serve_cue_track_handler, serve_video_handler};
pub use health::health_handler;
pub use listings::{list_transcriptions_handler, list_videos_handler};
pub use transcribe::{transcribe_video_api_handler, transcribe_video_handler};
pub use upload::upload_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

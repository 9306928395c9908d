use serde::Deserialize;

/// Process configuration, read once at startup and passed explicitly to each
/// component. Nothing here lives in ambient globals.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Base URL clients use to reach this service; baked into the absolute
    /// URLs returned by upload, transcription and listing responses.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub video_dir: String,
    pub track_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub whisper_model_path: String,
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub openai_model: Option<String>,
    pub ffmpeg_binary: String,
    pub ytdlp_binary: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
                public_base_url: std::env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            },
            storage: StorageSettings {
                video_dir: std::env::var("MEDIA_DIR")
                    .unwrap_or_else(|_| "uploaded_videos".to_string()),
                track_dir: std::env::var("TRACKS_DIR").unwrap_or_else(|_| "vtt_files".to_string()),
            },
            transcription: TranscriptionSettings {
                whisper_model_path: std::env::var("WHISPER_MODEL_PATH")
                    .unwrap_or_else(|_| "models/ggml-base.en.bin".to_string()),
                openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
                openai_model: std::env::var("OPENAI_WHISPER_MODEL").ok(),
                ffmpeg_binary: std::env::var("FFMPEG_BINARY")
                    .unwrap_or_else(|_| "ffmpeg".to_string()),
                ytdlp_binary: std::env::var("YTDLP_BINARY")
                    .unwrap_or_else(|_| "yt-dlp".to_string()),
            },
        }
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use capstan::application::services::{AcquisitionService, CatalogService, TranscriptionService};
use capstan::infrastructure::media::{
    AudioProfile, FfmpegAudioExtractor, HttpUrlFetcher, YtDlpDownloader,
};
use capstan::infrastructure::observability::{init_tracing, TracingConfig};
use capstan::infrastructure::storage::MediaLibrary;
use capstan::infrastructure::transcription::{OpenAiWhisperEngine, WhisperLocalEngine};
use capstan::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let library = Arc::new(MediaLibrary::new(
        PathBuf::from(&settings.storage.video_dir),
        PathBuf::from(&settings.storage.track_dir),
    )?);

    let acquisition = Arc::new(AcquisitionService::new(
        Arc::clone(&library),
        Arc::new(YtDlpDownloader::new(
            settings.transcription.ytdlp_binary.clone(),
        )),
        Arc::new(HttpUrlFetcher::new()),
    ));

    let local_engine = Arc::new(WhisperLocalEngine::new(
        PathBuf::from(&settings.transcription.whisper_model_path),
        Arc::new(FfmpegAudioExtractor::new(
            settings.transcription.ffmpeg_binary.clone(),
            AudioProfile::Wav16kMono,
        )),
    ));

    let remote_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.transcription.openai_api_key.clone(),
        settings.transcription.openai_base_url.clone(),
        settings.transcription.openai_model.clone(),
        Arc::new(FfmpegAudioExtractor::new(
            settings.transcription.ffmpeg_binary.clone(),
            AudioProfile::Mp3,
        )),
    ));

    let state = AppState {
        acquisition,
        local_transcription: Arc::new(TranscriptionService::new(
            Arc::clone(&library),
            local_engine,
        )),
        remote_transcription: Arc::new(TranscriptionService::new(
            Arc::clone(&library),
            remote_engine,
        )),
        catalog: Arc::new(CatalogService::new(
            Arc::clone(&library),
            settings.server.public_base_url.clone(),
        )),
        library,
        public_base_url: settings.server.public_base_url.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

mod ffmpeg_extractor;
mod http_fetcher;
mod ytdlp_downloader;

pub use ffmpeg_extractor::{AudioProfile, FfmpegAudioExtractor};
pub use http_fetcher::HttpUrlFetcher;
pub use ytdlp_downloader::YtDlpDownloader;

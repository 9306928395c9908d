mod audio_extractor;
mod media_fetcher;
mod transcriber;

pub use audio_extractor::{discard_temp_audio, AudioExtractor, ConversionError};
pub use media_fetcher::{DownloadError, PlatformDownloader, UrlFetcher};
pub use transcriber::{Transcriber, TranscriberError};

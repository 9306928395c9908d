use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use crate::application::ports::{AudioExtractor, ConversionError};

/// Target encoding for the extracted audio stream.
///
/// The remote backend uploads compressed mp3; the local whisper engine wants
/// 16 kHz mono PCM it can feed straight into inference.
#[derive(Debug, Clone, Copy)]
pub enum AudioProfile {
    Mp3,
    Wav16kMono,
}

impl AudioProfile {
    fn extension(&self) -> &'static str {
        match self {
            AudioProfile::Mp3 => "mp3",
            AudioProfile::Wav16kMono => "wav",
        }
    }

    fn codec_args(&self) -> &'static [&'static str] {
        match self {
            AudioProfile::Mp3 => &["-acodec", "libmp3lame", "-ab", "192k"],
            AudioProfile::Wav16kMono => &["-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"],
        }
    }
}

/// Invokes ffmpeg to drop the video stream and re-encode the audio into a
/// temporary file. The caller owns cleanup of the returned path.
pub struct FfmpegAudioExtractor {
    binary: String,
    profile: AudioProfile,
}

impl FfmpegAudioExtractor {
    pub fn new(binary: impl Into<String>, profile: AudioProfile) -> Self {
        Self {
            binary: binary.into(),
            profile,
        }
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract_audio(&self, video_path: &Path) -> Result<PathBuf, ConversionError> {
        let audio_path: PathBuf = std::env::temp_dir().join(format!(
            "capstan_audio_{}.{}",
            Uuid::new_v4().simple(),
            self.profile.extension()
        ));

        tracing::debug!(
            video = %video_path.display(),
            audio = %audio_path.display(),
            profile = ?self.profile,
            "Extracting audio track"
        );

        let output = Command::new(&self.binary)
            .arg("-i")
            .arg(video_path)
            .arg("-vn")
            .args(self.profile.codec_args())
            .arg("-y")
            .arg(&audio_path)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            // ffmpeg creates the output file as soon as the input probes;
            // a failed encode would otherwise leak a partial temp file the
            // caller never sees.
            remove_partial_output(&audio_path).await;
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConversionError::ToolFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(audio_path)
    }
}

async fn remove_partial_output(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Failed to remove partial audio output");
        }
    }
}

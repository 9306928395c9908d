use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{DownloadError, PlatformDownloader};

const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";

/// Downloads a merged audio+video mp4 from a video platform URL via the
/// yt-dlp tool.
pub struct YtDlpDownloader {
    binary: String,
}

impl YtDlpDownloader {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl PlatformDownloader for YtDlpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        tracing::debug!(url = %url, dest = %dest.display(), "Running yt-dlp");

        let output = Command::new(&self.binary)
            .arg("-f")
            .arg(FORMAT_SELECTOR)
            .arg("-o")
            .arg(dest)
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DownloadError::ToolFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

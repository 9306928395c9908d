use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{DownloadError, UrlFetcher};

const ERROR_BODY_LIMIT: usize = 512;

/// Streams the body of an arbitrary URL to disk.
///
/// Non-2xx responses are failures: nothing is written, so an error page can
/// never masquerade as a video file.
pub struct HttpUrlFetcher {
    client: reqwest::Client,
}

impl HttpUrlFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpUrlFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlFetcher for HttpUrlFetcher {
    async fn fetch_to_path(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            body.truncate(ERROR_BODY_LIMIT);
            return Err(DownloadError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| DownloadError::RequestFailed(e.to_string()))?;
            file.write_all(&bytes).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

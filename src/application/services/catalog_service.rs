use std::sync::Arc;

use serde::Serialize;

use crate::infrastructure::storage::{MediaLibrary, StorageError};

pub const VIDEO_EXTENSION: &str = ".mp4";
pub const TRACK_EXTENSION: &str = ".vtt";

/// Read-only enumeration of stored media and cue-track files. Plain
/// directory scans, no caching, no ordering guarantee.
pub struct CatalogService {
    library: Arc<MediaLibrary>,
    public_base_url: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub url: String,
    pub filename: String,
}

impl CatalogService {
    pub fn new(library: Arc<MediaLibrary>, public_base_url: String) -> Self {
        Self {
            library,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_videos(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        let names = self.library.list_videos(VIDEO_EXTENSION).await?;
        Ok(self.entries("uploaded_videos", names))
    }

    pub async fn list_cue_tracks(&self) -> Result<Vec<CatalogEntry>, StorageError> {
        let names = self.library.list_cue_tracks(TRACK_EXTENSION).await?;
        Ok(self.entries("vtt_files", names))
    }

    fn entries(&self, route: &str, names: Vec<String>) -> Vec<CatalogEntry> {
        names
            .into_iter()
            .map(|filename| CatalogEntry {
                url: format!("{}/{}/{}", self.public_base_url, route, filename),
                filename,
            })
            .collect()
    }
}

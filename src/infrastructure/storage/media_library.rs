use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::io::AsyncWriteExt;

/// Directory-backed store for media assets and their cue-track documents.
///
/// Two flat directories under a common base; filenames are the only linkage
/// between an asset and its cue track. No caching, no transactional
/// guarantees: concurrent writes to the same name are last-writer-wins.
pub struct MediaLibrary {
    video_dir: PathBuf,
    track_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl MediaLibrary {
    pub fn new(video_dir: PathBuf, track_dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&video_dir)?;
        std::fs::create_dir_all(&track_dir)?;
        Ok(Self {
            video_dir,
            track_dir,
        })
    }

    pub fn video_path(&self, filename: &str) -> PathBuf {
        self.video_dir.join(filename)
    }

    pub fn track_path(&self, filename: &str) -> PathBuf {
        self.track_dir.join(filename)
    }

    pub async fn save_video(&self, filename: &str, data: Bytes) -> Result<PathBuf, StorageError> {
        let path = self.video_path(filename);
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        file.write_all(&data)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    pub async fn write_cue_track(
        &self,
        filename: &str,
        contents: &str,
    ) -> Result<PathBuf, StorageError> {
        let path = self.track_path(filename);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    pub async fn video_exists(&self, filename: &str) -> bool {
        tokio::fs::try_exists(self.video_path(filename))
            .await
            .unwrap_or(false)
    }

    pub async fn read_video(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        read_file(&self.video_path(filename)).await
    }

    pub async fn read_cue_track(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        read_file(&self.track_path(filename)).await
    }

    pub async fn list_videos(&self, extension: &str) -> Result<Vec<String>, StorageError> {
        list_by_extension(&self.video_dir, extension).await
    }

    pub async fn list_cue_tracks(&self, extension: &str) -> Result<Vec<String>, StorageError> {
        list_by_extension(&self.track_dir, extension).await
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, StorageError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(StorageError::NotFound(path.display().to_string()))
        }
        Err(e) => Err(StorageError::Io(e)),
    }
}

/// Enumeration order is whatever the filesystem yields; callers must not
/// rely on it.
async fn list_by_extension(dir: &Path, extension: &str) -> Result<Vec<String>, StorageError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(extension) {
            names.push(name);
        }
    }
    Ok(names)
}

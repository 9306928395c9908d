use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// How a media asset arrived on local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginKind {
    Upload,
    YoutubeUrl,
    GenericUrl,
}

impl OriginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginKind::Upload => "upload",
            OriginKind::YoutubeUrl => "youtube_url",
            OriginKind::GenericUrl => "generic_url",
        }
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A media file persisted by the acquisition pipeline. Immutable once
/// written; the filename is its identity and links it to its cue track.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    pub filename: String,
    pub stored_path: PathBuf,
    pub origin: OriginKind,
    pub created_at: DateTime<Utc>,
}

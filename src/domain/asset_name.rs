use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Derives collision-resistant, chronologically sortable filenames for
/// incoming media assets.
///
/// Names look like `20260829_141502_3fa92c1b_lecture.mp4`: a second-level
/// capture timestamp for natural ordering, an 8-hex random fragment so two
/// acquisitions within the same second never collide, and an origin-specific
/// suffix (the sanitized upload filename, or a canonical `.mp4` name for
/// downloaded content).
pub struct AssetName;

impl AssetName {
    pub fn for_upload(now: DateTime<Utc>, original_filename: &str) -> String {
        let suffix = sanitize_filename(original_filename);
        Self::compose(now, &suffix)
    }

    pub fn for_youtube_download(now: DateTime<Utc>) -> String {
        Self::compose(now, "youtube_video.mp4")
    }

    pub fn for_generic_download(now: DateTime<Utc>) -> String {
        Self::compose(now, "downloaded_video.mp4")
    }

    fn compose(now: DateTime<Utc>, suffix: &str) -> String {
        let stamp = now.format("%Y%m%d_%H%M%S");
        let fragment = &Uuid::new_v4().simple().to_string()[..8];
        format!("{}_{}_{}", stamp, fragment, suffix)
    }
}

/// Replaces path separators and shell-hostile characters so an uploaded
/// filename can be used as a flat-directory entry.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(['_', '.']).is_empty() {
        "upload.mp4".to_string()
    } else {
        cleaned
    }
}

/// Name of the cue-track document for a given asset: extension stripped,
/// fixed suffix appended.
pub fn cue_track_name(asset_filename: &str) -> String {
    let base = match asset_filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => asset_filename,
    };
    format!("{}_transcription.vtt", base)
}

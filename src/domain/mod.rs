mod asset_name;
mod cue_track;
mod media_asset;
mod segment;

pub use asset_name::{cue_track_name, sanitize_filename, AssetName};
pub use cue_track::{format_timestamp, Cue, CueTrackDocument};
pub use media_asset::{MediaAsset, OriginKind};
pub use segment::SegmentRecord;

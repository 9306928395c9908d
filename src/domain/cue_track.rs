use super::SegmentRecord;

const WEBVTT_HEADER: &str = "WEBVTT";

/// One timed subtitle entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// An ordered collection of cues for one media asset, rendered as WebVTT.
///
/// Assembly is a pure, order-preserving filter/format stage: it repairs or
/// drops malformed segments but never errors and never re-sorts. A backend
/// that returns out-of-order segments yields an out-of-order (but still
/// individually valid) document.
#[derive(Debug, Clone, PartialEq)]
pub struct CueTrackDocument {
    cues: Vec<Cue>,
}

impl CueTrackDocument {
    /// Validates and converts raw backend segments into cues.
    ///
    /// A segment is dropped when its text trims to empty or when its end
    /// precedes its start; a single bad segment never aborts the transcript.
    pub fn assemble(segments: &[SegmentRecord]) -> Self {
        let cues = segments
            .iter()
            .filter_map(|segment| {
                let text = segment.text.trim();
                if text.is_empty() {
                    tracing::debug!(
                        start = segment.start,
                        end = segment.end,
                        "Dropping segment with empty text"
                    );
                    return None;
                }
                if segment.end < segment.start {
                    tracing::debug!(
                        start = segment.start,
                        end = segment.end,
                        "Dropping segment with inverted timing"
                    );
                    return None;
                }
                Some(Cue {
                    start: segment.start,
                    end: segment.end,
                    text: text.to_string(),
                })
            })
            .collect();

        Self { cues }
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Renders the document. Always syntactically valid WebVTT, even for an
    /// empty cue list (header plus trailing blank line only).
    pub fn render(&self) -> String {
        let mut out = String::from(WEBVTT_HEADER);
        out.push_str("\n\n");
        for cue in &self.cues {
            out.push_str(&format_timestamp(cue.start));
            out.push_str(" --> ");
            out.push_str(&format_timestamp(cue.end));
            out.push('\n');
            out.push_str(&cue.text);
            out.push_str("\n\n");
        }
        out
    }
}

/// Formats a seconds offset as `HH:MM:SS.mmm`.
///
/// Milliseconds are the floored fractional remainder, so `125.4` renders as
/// `00:02:05.400` and `3661.005` as `01:01:01.005`. Hours widen past two
/// digits for very long media.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let millis = ((seconds % 1.0) * 1000.0) as u32;
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

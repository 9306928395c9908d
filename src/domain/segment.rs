/// Raw timing + text unit as emitted by a transcription backend, prior to
/// normalization. Both backends produce this shape; extra response fields
/// are discarded at the adapter boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRecord {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl SegmentRecord {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

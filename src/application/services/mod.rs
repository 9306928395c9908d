mod acquisition_service;
mod catalog_service;
mod transcription_service;

pub use acquisition_service::{AcquisitionError, AcquisitionService};
pub use catalog_service::{CatalogEntry, CatalogService};
pub use transcription_service::{TranscriptionOutcome, TranscriptionService, TranscriptionServiceError};

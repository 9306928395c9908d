use std::sync::Arc;

use crate::application::services::{AcquisitionService, CatalogService, TranscriptionService};
use crate::infrastructure::storage::MediaLibrary;

#[derive(Clone)]
pub struct AppState {
    pub acquisition: Arc<AcquisitionService>,
    pub local_transcription: Arc<TranscriptionService>,
    pub remote_transcription: Arc<TranscriptionService>,
    pub catalog: Arc<CatalogService>,
    pub library: Arc<MediaLibrary>,
    pub public_base_url: String,
}

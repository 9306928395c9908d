mod settings;

pub use settings::{ServerSettings, Settings, StorageSettings, TranscriptionSettings};

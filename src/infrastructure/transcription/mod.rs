mod openai_whisper_engine;
mod whisper_local_engine;

pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use whisper_local_engine::WhisperLocalEngine;

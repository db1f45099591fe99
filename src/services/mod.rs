//! External service collaborators
//!
//! The orchestrator only sees three narrow async traits; the HTTP adapters
//! behind them talk to a whisper-style transcription server, an Ollama chat
//! endpoint, and a TTS server that returns raw audio bytes. Adapters report
//! failures as `anyhow` errors with context; the orchestrator maps them to
//! its typed taxonomy at the boundary.

mod model;
mod speech;
mod transcriber;

use anyhow::Result;

use crate::interview::ChatMessage;

pub use model::OllamaChatModel;
pub use speech::HttpSpeechSynthesizer;
pub use transcriber::WhisperTranscriber;

/// Speech-to-text service.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Convert an audio sample to text. An unintelligible recording may come
    /// back as an empty string rather than an error.
    async fn transcribe(&self, audio: &[u8], language: &str) -> Result<String>;
}

/// Language model service consumed as one blocking round-trip per call.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate one message from the ordered role-tagged history.
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Text-to-speech service.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the text and return the storage reference of the artifact.
    async fn synthesize(&self, text: &str) -> Result<String>;
}

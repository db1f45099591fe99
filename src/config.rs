use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub transcription: TranscriptionConfig,
    pub model: ModelConfig,
    pub speech: SpeechConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionConfig {
    /// Whisper-style inference endpoint
    pub endpoint: String,
    /// Language hint passed with every sample
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    /// Ollama-compatible chat endpoint
    pub endpoint: String,
    /// Model name sent with every request
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeechConfig {
    /// TTS endpoint returning raw audio bytes
    pub endpoint: String,
    pub voice: String,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per interview snapshot
    pub snapshots_path: String,
    /// Directory holding synthesized question audio
    pub responses_path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

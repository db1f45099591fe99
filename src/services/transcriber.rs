use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use super::Transcriber;

/// Client for a whisper-server style `/inference` endpoint that accepts a
/// multipart audio upload and returns `{"text": ...}`.
pub struct WhisperTranscriber {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl WhisperTranscriber {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio: &[u8], language: &str) -> Result<String> {
        let file = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name("answer.wav")
            .mime_str("audio/wav")
            .context("failed to build audio upload part")?;

        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("language", language.to_string())
            .text("response_format", "json");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .context("failed to reach the transcription endpoint")?;

        if !response.status().is_success() {
            bail!("transcription endpoint returned {}", response.status());
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .context("transcription endpoint did not return valid JSON")?;

        info!(chars = body.text.len(), "transcribed audio sample");

        Ok(body.text)
    }
}

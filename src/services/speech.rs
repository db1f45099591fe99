use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::SpeechSynthesizer;

/// Client for an HTTP TTS endpoint that returns raw audio bytes.
///
/// Each synthesized question is written under the responses directory as
/// `<uuid>.mp3`; the file name is the storage reference handed back to the
/// orchestrator and served to clients under `/audio`.
pub struct HttpSpeechSynthesizer {
    http: reqwest::Client,
    endpoint: String,
    voice: String,
    output_dir: PathBuf,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

impl HttpSpeechSynthesizer {
    pub fn new(endpoint: String, voice: String, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            voice,
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<String> {
        let request = SynthesisRequest {
            text,
            voice: &self.voice,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("failed to reach the speech endpoint")?;

        if !response.status().is_success() {
            bail!("speech endpoint returned {}", response.status());
        }

        let audio = response
            .bytes()
            .await
            .context("failed to read synthesized audio body")?;
        if audio.is_empty() {
            bail!("speech endpoint returned an empty audio artifact");
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .context("failed to create responses directory")?;

        let file_name = format!("{}.mp3", Uuid::new_v4());
        let path = self.output_dir.join(&file_name);
        tokio::fs::write(&path, &audio)
            .await
            .with_context(|| format!("failed to write audio artifact {}", path.display()))?;

        info!(artifact = %file_name, bytes = audio.len(), "synthesized question audio");

        Ok(file_name)
    }
}

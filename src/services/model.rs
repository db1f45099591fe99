use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ChatModel;
use crate::interview::ChatMessage;

/// Chat client for an Ollama-compatible `/api/chat` endpoint.
pub struct OllamaChatModel {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaChatModel {
    pub fn new(endpoint: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            model,
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for OllamaChatModel {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("failed to reach the model endpoint")?;

        if !response.status().is_success() {
            bail!("model endpoint returned {}", response.status());
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("model endpoint did not return valid JSON")?;

        info!(
            model = %self.model,
            history = messages.len(),
            "generated model reply"
        );

        Ok(body.message.content)
    }
}

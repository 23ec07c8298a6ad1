//! Ollama LLM Provider
//!
//! Client for a local Ollama instance, typically at
//! http://localhost:11434. Needs no API key, which makes it the
//! zero-configuration default for local experimentation.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use super::{error_for_status, error_for_transport, LLMError, LLMProvider, Result};
use crate::config::OllamaConfig;

pub struct OllamaProvider {
    config: OllamaConfig,
    client: reqwest::Client,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    pub fn new(config: OllamaConfig, timeout_secs: u64) -> Self {
        Self {
            config,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.config.base_url);

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "stream": false,
        });

        tracing::debug!(
            "Ollama request: model={}, prompt_chars={}",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(error_for_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, text));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        let message = data
            .get("message")
            .ok_or_else(|| LLMError::ParseError("No message in response".to_string()))?;

        Ok(message
            .get("content")
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string())
    }
}

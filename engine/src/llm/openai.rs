//! OpenAI LLM Provider
//!
//! Chat-completions client for the OpenAI API. The prompt is sent as a
//! single user message; the first choice's message content is the
//! completion.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use super::{error_for_status, error_for_transport, LLMError, LLMProvider, Result};
use crate::config::OpenAIConfig;

pub struct OpenAIProvider {
    config: OpenAIConfig,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with an explicit API key
    pub fn new(config: OpenAIConfig, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn check_health(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
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
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .ok_or_else(|| LLMError::ParseError("No choices in response".to_string()))?;

        // A null or missing content field reads as an empty completion;
        // the pipeline decides whether that is fatal.
        Ok(message
            .get("content")
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string())
    }
}

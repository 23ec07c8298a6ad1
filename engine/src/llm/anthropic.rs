//! Anthropic LLM Provider
//!
//! Messages-API client for Anthropic. Text blocks in the response content
//! array are concatenated into the completion.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use super::{error_for_status, error_for_transport, LLMError, LLMProvider, Result};
use crate::config::AnthropicConfig;

pub struct AnthropicProvider {
    config: AnthropicConfig,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with an explicit API key
    pub fn new(config: AnthropicConfig, api_key: impl Into<String>, timeout_secs: u64) -> Self {
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
impl LLMProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn check_health(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/messages", self.config.base_url);

        let payload = json!({
            "model": self.config.model,
            "max_tokens": 4096,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
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

        let content_arr = data
            .get("content")
            .and_then(|c| c.as_array())
            .ok_or_else(|| LLMError::ParseError("No content array in response".to_string()))?;

        let mut full_content = String::new();
        for item in content_arr {
            if let Some(text) = item.get("text").and_then(|t| t.as_str()) {
                full_content.push_str(text);
            }
        }

        Ok(full_content)
    }
}

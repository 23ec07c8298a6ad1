//! LLM Provider Abstraction Layer
//!
//! This module provides a common interface for the external model calls the
//! build pipeline depends on. The [`LLMProvider`] trait is deliberately
//! narrow — one prompt in, one text completion out — so the whole pipeline
//! can run against a scripted stand-in during tests.
//!
//! It also hosts the JSON recovery helpers used by the stages that expect
//! structured output: models asked for JSON still wrap it in prose or
//! markdown fences often enough that a strict parse is not good enough.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

use crate::config::LLMConfig;

pub mod anthropic;
pub mod ollama;
pub mod openai;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Errors that can occur during LLM operations
///
/// These are call-level failures: the external service itself erred or
/// could not be reached. Unparseable-but-present model text is never an
/// `LLMError`; that is handled inside the pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<LLMError> for sdk::errors::EngineError {
    fn from(err: LLMError) -> Self {
        sdk::errors::EngineError::LLMProvider(err.to_string())
    }
}

/// LLM Provider trait that all providers must implement
///
/// A provider is a single request/single response text completion. An
/// empty completion is returned as `Ok("")` — whether that is an error is
/// the caller's decision, not the provider's.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Returns the name of the provider (e.g., "openai", "anthropic")
    fn name(&self) -> &str;

    /// Send one prompt and return the model's text completion
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is currently usable.
    /// Default implementation returns true.
    async fn check_health(&self) -> bool {
        true
    }
}

/// Build the configured provider, resolving API keys from the environment
///
/// Keys are injected into the provider constructors here, at the edge, so
/// the providers themselves never read ambient state.
pub fn provider_from_config(config: &LLMConfig) -> Result<Arc<dyn LLMProvider>> {
    match config.default_provider.as_str() {
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                LLMError::AuthenticationFailed("OPENAI_API_KEY is not set".to_string())
            })?;
            Ok(Arc::new(openai::OpenAIProvider::new(
                config.openai.clone(),
                api_key,
                config.timeout_secs,
            )))
        }
        "anthropic" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                LLMError::AuthenticationFailed("ANTHROPIC_API_KEY is not set".to_string())
            })?;
            Ok(Arc::new(anthropic::AnthropicProvider::new(
                config.anthropic.clone(),
                api_key,
                config.timeout_secs,
            )))
        }
        "ollama" => Ok(Arc::new(ollama::OllamaProvider::new(
            config.ollama.clone(),
            config.timeout_secs,
        ))),
        other => Err(LLMError::ProviderUnavailable(format!(
            "unknown provider '{other}'"
        ))),
    }
}

/// Map an HTTP error status from a provider API to an [`LLMError`]
pub(crate) fn error_for_status(status: StatusCode, body: String) -> LLMError {
    match status.as_u16() {
        401 | 403 => LLMError::AuthenticationFailed(body),
        429 => LLMError::RateLimitExceeded,
        _ => LLMError::InvalidRequest(format!("{status}: {body}")),
    }
}

/// Map a reqwest transport failure to an [`LLMError`]
pub(crate) fn error_for_transport(err: reqwest::Error) -> LLMError {
    if err.is_timeout() {
        LLMError::Timeout
    } else if err.is_connect() {
        LLMError::ProviderUnavailable(err.to_string())
    } else {
        LLMError::NetworkError(err.to_string())
    }
}

/// Recover a JSON object from model output.
///
/// Recovery order:
/// 1. the response itself, when it starts with `{`
/// 2. the body of the first markdown code fence
/// 3. the first balanced `{...}` anywhere in the text
///
/// Returns `None` when no balanced object exists at all; the caller decides
/// what non-recovery means (fallback plan, raw passthrough).
pub fn extract_json_object(content: &str) -> Option<&str> {
    let trimmed = content.trim();

    if trimmed.starts_with('{') {
        if let Some(obj) = balanced_object(trimmed) {
            return Some(obj);
        }
    }

    if let Some(body) = fenced_block(trimmed) {
        let body = body.trim();
        if body.starts_with('{') {
            if let Some(obj) = balanced_object(body) {
                return Some(obj);
            }
        }
    }

    trimmed
        .find('{')
        .and_then(|pos| balanced_object(&trimmed[pos..]))
}

/// Extract the body of the first markdown code fence in the text.
///
/// Works even when there is trailing prose after the closing ```.
fn fenced_block(content: &str) -> Option<&str> {
    let fence_start = content.find("```")?;
    let after_opening = &content[fence_start + 3..];

    // Skip the language tag line (e.g. "json\n")
    let body_start_rel = after_opening.find('\n')? + 1;
    let body_start = fence_start + 3 + body_start_rel;

    let closing = content[body_start..].find("```")?;
    let body_end = body_start + closing;

    if body_start >= body_end {
        return None;
    }

    Some(&content[body_start..body_end])
}

/// Extract a balanced JSON object starting at position 0 of `s`.
///
/// Counts `{` / `}` depth, respecting string literals and escapes, to find
/// the matching close brace.
fn balanced_object(s: &str) -> Option<&str> {
    if !s.starts_with('{') {
        return None;
    }
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_bare_object() {
        let content = r#"{"title": "Acme", "pages": ["home"]}"#;
        assert_eq!(extract_json_object(content), Some(content));
    }

    #[test]
    fn test_extracts_fenced_object() {
        let content = "Here is the plan:\n```json\n{\"title\": \"Acme\"}\n```\nLet me know!";
        assert_eq!(extract_json_object(content), Some("{\"title\": \"Acme\"}"));
    }

    #[test]
    fn test_extracts_object_embedded_in_prose() {
        let content = "Sure! The plan is {\"title\": \"Acme\", \"tags\": {\"a\": 1}} as requested.";
        assert_eq!(
            extract_json_object(content),
            Some("{\"title\": \"Acme\", \"tags\": {\"a\": 1}}")
        );
    }

    #[test]
    fn test_braces_inside_strings_do_not_confuse_depth() {
        let content = r#"{"title": "curly } brace", "x": 1}"#;
        assert_eq!(extract_json_object(content), Some(content));
    }

    #[test]
    fn test_no_object_returns_none() {
        assert_eq!(extract_json_object("not json"), None);
        assert_eq!(extract_json_object(""), None);
        assert_eq!(extract_json_object("unbalanced { forever"), None);
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, String::new()),
            LLMError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, String::new()),
            LLMError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            LLMError::RateLimitExceeded
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            LLMError::InvalidRequest(_)
        ));
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = LLMConfig {
            default_provider: "carrier-pigeon".to_string(),
            ..LLMConfig::default()
        };
        assert!(matches!(
            provider_from_config(&config),
            Err(LLMError::ProviderUnavailable(_))
        ));
    }
}

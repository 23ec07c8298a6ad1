//! Shared test support: a scripted in-process LLM provider.

use async_trait::async_trait;
use sitewright_engine::llm::{LLMError, LLMProvider, Result};

/// What a matched rule replies with
enum Script {
    Reply(String),
    Fail,
}

/// Deterministic provider for pipeline tests.
///
/// Rules are checked in registration order against the outgoing prompt;
/// the first rule whose needle the prompt contains wins. Register a rule
/// with an empty needle last as a catch-all. Unmatched prompts reply with
/// an empty string.
pub struct ScriptedProvider {
    rules: Vec<(String, Script)>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Reply with `response` to prompts containing `needle`
    pub fn on(mut self, needle: &str, response: &str) -> Self {
        self.rules
            .push((needle.to_string(), Script::Reply(response.to_string())));
        self
    }

    /// Fail the call for prompts containing `needle`
    pub fn fail_on(mut self, needle: &str) -> Self {
        self.rules.push((needle.to_string(), Script::Fail));
        self
    }
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        for (needle, script) in &self.rules {
            if prompt.contains(needle.as_str()) {
                return match script {
                    Script::Reply(text) => Ok(text.clone()),
                    Script::Fail => Err(LLMError::NetworkError("scripted failure".to_string())),
                };
            }
        }
        Ok(String::new())
    }
}

//! Configuration management
//!
//! This module handles loading, validation, and management of the
//! Sitewright configuration. Configuration is stored in TOML format at
//! `~/.sitewright/config.toml`.
//!
//! # Configuration Sections
//!
//! - **core**: output directory for generated sites, log level
//! - **llm**: provider selection and per-provider settings
//! - **server**: HTTP API bind address
//!
//! # Environment Overrides
//!
//! Applied after the file is read, so deployments can override without
//! editing it:
//!
//! - `SITEWRIGHT_OUTPUT_DIR` — overrides `core.output_dir`
//! - `SITEWRIGHT_PORT` — overrides `server.port`
//!
//! API keys never live in the file; they are read from `OPENAI_API_KEY` /
//! `ANTHROPIC_API_KEY` when the provider is constructed.

use sdk::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Core engine settings
    #[serde(default)]
    pub core: CoreConfig,

    /// LLM provider configuration
    #[serde(default)]
    pub llm: LLMConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Core engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Directory generated sites are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// Default LLM provider (openai, anthropic, ollama)
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Request timeout for provider calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// OpenAI provider settings
    #[serde(default)]
    pub openai: OpenAIConfig,

    /// Anthropic provider settings
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Ollama provider settings
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            timeout_secs: default_timeout_secs(),
            openai: OpenAIConfig::default(),
            anthropic: AnthropicConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// OpenAI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// Base URL for the OpenAI API
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_openai_model")]
    pub model: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            model: default_openai_model(),
        }
    }
}

/// Anthropic provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// Base URL for the Anthropic API
    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_anthropic_model")]
    pub model: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: default_anthropic_base_url(),
            model: default_anthropic_model(),
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL for the Ollama API
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_ollama_model(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./generated_sites")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com/v1".to_string()
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-5".to_string()
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.1:8b".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Default location of the config file
    pub fn config_path() -> Result<PathBuf, EngineError> {
        dirs::home_dir()
            .map(|home| home.join(".sitewright").join("config.toml"))
            .ok_or_else(|| EngineError::Config("Could not determine home directory".to_string()))
    }

    /// Load the config from its default location, writing a default file
    /// first if none exists yet
    pub fn load_or_create() -> Result<Self, EngineError> {
        let path = Self::config_path()?;
        if !path.exists() {
            let config = Config::default();
            config.save_to_path(&path)?;
            tracing::info!("Created default config at {}", path.display());
            return Ok(config.with_env_overrides());
        }
        Self::load_from_path(&path)
    }

    /// Load the config from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&raw).map_err(|e| {
            EngineError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config.with_env_overrides())
    }

    /// Write the config to the given path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<(), EngineError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, rendered)?;
        Ok(())
    }

    /// The address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Environment variables win over the file
    fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("SITEWRIGHT_OUTPUT_DIR") {
            if !dir.is_empty() {
                self.core.output_dir = PathBuf::from(dir);
            }
        }
        if let Ok(port) = std::env::var("SITEWRIGHT_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring non-numeric SITEWRIGHT_PORT: {}", port),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.core.output_dir, PathBuf::from("./generated_sites"));
        assert_eq!(config.core.log_level, "info");
        assert_eq!(config.llm.default_provider, "openai");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            default_provider = "ollama"

            [server]
            port = 8080
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.llm.default_provider, "ollama");
        assert_eq!(config.llm.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.core.log_level, "info");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&rendered).expect("reparse");
        assert_eq!(parsed.llm.default_provider, config.llm.default_provider);
        assert_eq!(parsed.core.output_dir, config.core.output_dir);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::default();
        config.save_to_path(&path).expect("save");
        let loaded = Config::load_from_path(&path).expect("load");
        assert_eq!(loaded.server.port, config.server.port);
    }

    #[test]
    fn test_broken_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").expect("write");

        let err = Config::load_from_path(&path).expect_err("should fail");
        assert!(matches!(err, EngineError::Config(_)));
    }
}

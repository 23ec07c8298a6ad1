//! Error types and handling
//!
//! This module provides the engine-level error type shared across the
//! workspace. All errors implement [`EngineErrorExt`], which attaches a
//! user-facing hint so CLI handlers can print something actionable next to
//! the failure itself, and marks whether a retry can reasonably succeed.
//!
//! Parse-level problems in model output never appear here: those are
//! absorbed inside the pipeline stage that hit them (fallback plan, raw
//! text passthrough). Only call-level failures cross stage boundaries.

use thiserror::Error;

/// Trait for engine error extensions
pub trait EngineErrorExt {
    /// Returns a user-friendly hint for the error
    ///
    /// Hints are safe to display to end users and contain no secrets or
    /// internal paths.
    fn user_hint(&self) -> &str;

    /// Returns whether retrying the operation can succeed without manual
    /// intervention
    fn is_recoverable(&self) -> bool;
}

/// Main engine error type
///
/// # Error categories
///
/// - **Configuration**: invalid or missing configuration
/// - **LLM provider**: the external model call itself failed
/// - **Empty response**: the model call succeeded but returned no text
/// - **Storage**: persistence of generated sites
#[derive(Debug, Error)]
pub enum EngineError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // LLM provider errors
    #[error("LLM provider error: {0}")]
    LLMProvider(String),

    #[error("No response from model")]
    EmptyResponse,

    // Storage errors
    #[error("Website not found: {0}")]
    SiteNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineErrorExt for EngineError {
    fn user_hint(&self) -> &str {
        match self {
            Self::Config(_) => "Check your config.toml file for errors",
            Self::LLMProvider(_) => "LLM provider unavailable. Check your API key and network",
            Self::EmptyResponse => "The model returned no text. Try the build again",
            Self::SiteNotFound(_) => "No generated site with that id. Run 'sitewright list'",
            Self::Serialization(_) => "The generated artifact could not be encoded",
            Self::Io(_) => "File system operation failed",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // A bad config file needs the user to fix it first
            Self::Config(_) => false,

            // All other errors are potentially recoverable
            _ => true,
        }
    }
}

//! Sitewright Engine Library
//!
//! This library provides the core functionality of the Sitewright engine:
//! turning a free-text website requirement into a static site (HTML, CSS,
//! JSON content) by orchestrating a short pipeline of LLM calls. It is
//! used by both the `sitewright` binary and the integration tests.

/// Configuration management module
pub mod config;

/// LLM provider abstraction layer
pub mod llm;

/// Website build pipeline
pub mod agent;

/// Persistence of generated sites
pub mod storage;

/// HTTP API server
pub mod server;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;

//! Command handlers for CLI operations
//!
//! This module implements the handlers for all CLI commands:
//! - serve: run the HTTP API server
//! - build: one-shot build from the command line
//! - list / show: inspect generated sites
//! - config show / init: inspect or (re)create the config file

use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use crate::agent::WebsiteBuilder;
use crate::config::Config;
use crate::llm;
use crate::server::{self, ServerState};
use crate::storage::SiteStore;
use sdk::errors::EngineErrorExt;

/// Output format for command results
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine consumption
    Json,
}

/// Wire up the builder and store from configuration
fn build_state(config: &Config) -> Result<ServerState> {
    let provider = llm::provider_from_config(&config.llm)?;
    tracing::debug!("Using LLM provider '{}'", provider.name());

    Ok(ServerState {
        builder: Arc::new(WebsiteBuilder::new(provider)),
        store: Arc::new(SiteStore::new(config.core.output_dir.clone())),
    })
}

/// Run the HTTP API server until shutdown
pub async fn handle_serve(config: &Config) -> Result<()> {
    let state = build_state(config)?;
    server::serve(&config.bind_addr(), state).await?;
    Ok(())
}

/// Build a website immediately and persist it
pub async fn handle_build(
    requirements: String,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let state = build_state(config)?;

    match state.builder.build_website(&requirements).await {
        Ok(website) => {
            let output_path = state.store.save(&website)?;
            match format {
                OutputFormat::Json => {
                    let summary = json!({
                        "success": true,
                        "website": website,
                        "outputPath": output_path.display().to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Text => {
                    println!(
                        "Built '{}' ({}, {} pages)",
                        website.title,
                        website.site_type,
                        website.pages.len()
                    );
                    println!("Output: {}", output_path.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Build failed: {e}");
            eprintln!("Hint: {}", e.user_hint());
            Err(e.into())
        }
    }
}

/// List generated websites
pub fn handle_list(config: &Config, format: OutputFormat) -> Result<()> {
    let store = SiteStore::new(config.core.output_dir.clone());
    let sites = store.list();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json!({ "sites": sites }))?),
        OutputFormat::Text => {
            if sites.is_empty() {
                println!("No generated websites in {}", store.output_dir().display());
            } else {
                for site in sites {
                    println!("{site}");
                }
            }
        }
    }
    Ok(())
}

/// Print a stored website artifact as JSON
pub fn handle_show(id: String, config: &Config) -> Result<()> {
    let store = SiteStore::new(config.core.output_dir.clone());
    match store.load(&id) {
        Ok(artifact) => {
            println!("{}", serde_json::to_string_pretty(&artifact)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Hint: {}", e.user_hint());
            Err(e.into())
        }
    }
}

/// Print the active configuration
pub fn handle_config_show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}

/// Write a fresh default config file
///
/// Works without loading the current config, so it can repair a broken
/// file.
pub fn handle_config_init(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::config_path()?,
    };
    Config::default().save_to_path(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

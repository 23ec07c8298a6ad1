//! CLI interface for Sitewright
//!
//! This module provides the command-line interface using clap's derive
//! API. It defines all commands and global flags for the `sitewright`
//! binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sitewright Website Builder
///
/// Turns a natural-language website requirement into a static site by
/// orchestrating a pipeline of LLM calls, and serves the results over a
/// small REST API.
#[derive(Parser, Debug)]
#[command(name = "sitewright")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve,

    /// Build a website from a requirement immediately
    Build {
        /// The website requirement to build from
        requirements: String,
    },

    /// List generated websites
    List,

    /// Print a stored website artifact
    Show {
        /// Site id (directory name under the output root)
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a fresh default config file
    Init,
}

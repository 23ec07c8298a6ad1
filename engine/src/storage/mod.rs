//! Persistence of generated sites
//!
//! Successful builds are written as one directory per site under a
//! configurable output root: `index.html`, `styles.css`, `content.json`
//! (the content map), and `config.json` (the full artifact). The directory
//! name is the sanitized site title and doubles as the site id on the
//! HTTP API and CLI.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

use sdk::errors::EngineError;
use sdk::types::WebsiteArtifact;

/// Runs of characters outside this class collapse to a single `-`
fn id_filter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("static regex"))
}

pub struct SiteStore {
    output_dir: PathBuf,
}

impl SiteStore {
    /// Create a store rooted at the given output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The root all sites are written under
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Sanitize a title into a directory-safe site id
    pub fn site_id(title: &str) -> String {
        let id = id_filter().replace_all(title.trim(), "-");
        let id = id.trim_matches('-');
        if id.is_empty() {
            "untitled".to_string()
        } else {
            id.to_string()
        }
    }

    /// Persist an artifact; returns the site directory
    pub fn save(&self, artifact: &WebsiteArtifact) -> Result<PathBuf, EngineError> {
        let site_dir = self.output_dir.join(Self::site_id(&artifact.title));
        fs::create_dir_all(&site_dir)?;

        fs::write(site_dir.join("index.html"), &artifact.html)?;
        fs::write(site_dir.join("styles.css"), &artifact.styles)?;
        fs::write(
            site_dir.join("content.json"),
            serde_json::to_string_pretty(&artifact.content)
                .map_err(|e| EngineError::Serialization(e.to_string()))?,
        )?;
        fs::write(
            site_dir.join("config.json"),
            serde_json::to_string_pretty(artifact)
                .map_err(|e| EngineError::Serialization(e.to_string()))?,
        )?;

        debug!("Saved site to {}", site_dir.display());
        Ok(site_dir)
    }

    /// List generated site ids; an unreadable root reads as empty
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.output_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut sites: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        sites.sort();
        sites
    }

    /// Load a stored artifact by site id
    pub fn load(&self, id: &str) -> Result<WebsiteArtifact, EngineError> {
        // Ids are single path components; anything else cannot name a site
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return Err(EngineError::SiteNotFound(id.to_string()));
        }

        let config_path = self.output_dir.join(id).join("config.json");
        let raw = fs::read_to_string(&config_path)
            .map_err(|_| EngineError::SiteNotFound(id.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

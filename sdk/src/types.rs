//! Website data model
//!
//! Wire types shared between the engine and its consumers: the structured
//! plan produced by requirement analysis, per-page content, and the final
//! assembled artifact. Everything serializes with camelCase keys — the
//! shape persisted to `config.json` and returned by the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category of website a plan describes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    /// Personal or professional portfolio
    Portfolio,

    /// Company or service website
    Business,

    /// Online store
    Ecommerce,

    /// Article-centric site
    Blog,

    /// Single-purpose landing page
    #[default]
    Landing,
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteType::Portfolio => write!(f, "portfolio"),
            SiteType::Business => write!(f, "business"),
            SiteType::Ecommerce => write!(f, "ecommerce"),
            SiteType::Blog => write!(f, "blog"),
            SiteType::Landing => write!(f, "landing"),
        }
    }
}

/// Structured build plan produced by requirement analysis
///
/// Model output is not guaranteed to carry every field, so each one has a
/// default and the container falls back to it per-field. A plan parsed
/// from JSON that omits `palette` (say) is still a valid plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WebsitePlan {
    /// Website title
    pub title: String,

    /// Short description of the site
    pub description: String,

    /// Website category
    pub site_type: SiteType,

    /// Ordered page identifiers; must be non-empty before content or HTML
    /// generation runs
    pub pages: Vec<String>,

    /// Visual theme descriptor (free text, e.g. "modern", "classic")
    pub theme: String,

    /// Ordered color values; downstream prompts index into the first three
    pub palette: Vec<String>,

    /// Requested feature names
    pub features: Vec<String>,

    /// Tone descriptor for generated copy (e.g. "formal", "casual")
    pub content_style: String,
}

impl Default for WebsitePlan {
    fn default() -> Self {
        Self {
            title: "Untitled Website".to_string(),
            description: String::new(),
            site_type: SiteType::Landing,
            pages: WebsitePlan::default_pages(),
            theme: "modern".to_string(),
            palette: WebsitePlan::default_palette(),
            features: Vec::new(),
            content_style: "professional".to_string(),
        }
    }
}

impl WebsitePlan {
    /// The page set used when a plan does not name any pages
    pub fn default_pages() -> Vec<String> {
        vec![
            "home".to_string(),
            "about".to_string(),
            "contact".to_string(),
        ]
    }

    /// The color palette used when a plan does not provide one
    pub fn default_palette() -> Vec<String> {
        vec![
            "#2563eb".to_string(),
            "#1e40af".to_string(),
            "#0c4a6e".to_string(),
        ]
    }

    /// Fixed fallback plan used when model output cannot be parsed at all
    ///
    /// The original requirement text is kept as the description so the
    /// downstream stages still have something to work from.
    pub fn fallback(requirements: &str) -> Self {
        Self {
            description: requirements.to_string(),
            ..Self::default()
        }
    }
}

/// Content generated for a single page
///
/// Structured when the model returned parseable JSON, otherwise the raw
/// response text kept verbatim. Untagged so structured pages serialize as
/// objects and raw pages as plain strings — the `content.json` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PageContent {
    /// Parsed page record
    Structured(PageRecord),

    /// Unparseable model output, preserved as-is
    Raw(String),
}

/// Structured content for one page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRecord {
    /// Page title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Ordered body sections
    pub sections: Vec<PageSection>,
}

/// One heading + body block within a page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageSection {
    /// Section heading
    pub heading: String,

    /// Section body text
    pub content: String,
}

/// Final assembled website output
///
/// Immutable once constructed; owned solely by the caller of the build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteArtifact {
    /// Website title (also names the output directory after sanitization)
    pub title: String,

    /// Short description of the site
    pub description: String,

    /// Website category
    pub site_type: SiteType,

    /// Ordered page identifiers
    pub pages: Vec<String>,

    /// Generated markup
    pub html: String,

    /// Generated stylesheet
    pub styles: String,

    /// Generated content keyed by page identifier
    pub content: HashMap<String, PageContent>,

    /// Build metadata
    pub metadata: ArtifactMetadata,
}

/// Metadata recorded when an artifact is assembled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    /// Assembly timestamp
    pub created_at: DateTime<Utc>,

    /// Theme the plan asked for
    pub theme: String,

    /// Palette the plan asked for
    pub palette: Vec<String>,
}

/// Body of a build request on the HTTP API
#[derive(Debug, Clone, Deserialize)]
pub struct BuildRequest {
    /// Free-text website requirement
    pub requirements: String,

    /// Optional caller preferences, accepted but not applied to the plan
    #[serde(default)]
    pub options: Option<BuildOptions>,
}

/// Caller preferences on a build request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Preferred theme
    pub theme: Option<String>,

    /// Preferred page set
    pub pages: Option<Vec<String>>,

    /// Preferred features
    pub features: Option<Vec<String>>,
}

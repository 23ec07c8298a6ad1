//! Build orchestration
//!
//! This module sequences the four pipeline stages into one build:
//!
//! 1. Analyze the requirement into a plan
//! 2. Generate page content and styles (no data dependency between them,
//!    so they run concurrently)
//! 3. Generate HTML from the plan and content
//! 4. Assemble the artifact, stamping the creation time
//!
//! The first stage failure aborts the whole build. There are no retries
//! and no partial artifacts: a build either returns a complete
//! [`WebsiteArtifact`] or a single error.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::agent::{ContentGenerator, HtmlGenerator, RequirementAnalyzer, StyleGenerator};
use crate::llm::LLMProvider;
use sdk::errors::EngineError;
use sdk::types::{ArtifactMetadata, PageContent, WebsiteArtifact};

pub struct WebsiteBuilder {
    analyzer: RequirementAnalyzer,
    content: ContentGenerator,
    style: StyleGenerator,
    html: HtmlGenerator,
}

impl WebsiteBuilder {
    /// Create a builder whose stages all call through the given provider
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            analyzer: RequirementAnalyzer::new(Arc::clone(&provider)),
            content: ContentGenerator::new(Arc::clone(&provider)),
            style: StyleGenerator::new(Arc::clone(&provider)),
            html: HtmlGenerator::new(provider),
        }
    }

    /// Build a website from a free-text requirement.
    ///
    /// Each invocation is independent; concurrent builds share nothing but
    /// the provider handle.
    pub async fn build_website(&self, requirements: &str) -> Result<WebsiteArtifact, EngineError> {
        let build_id = Uuid::new_v4();
        info!(%build_id, "Building website: {}", requirements);

        match self.run_stages(requirements).await {
            Ok(artifact) => {
                info!(%build_id, title = %artifact.title, "Website built successfully");
                Ok(artifact)
            }
            Err(e) => {
                error!(%build_id, "Website build failed: {}", e);
                Err(e)
            }
        }
    }

    async fn run_stages(&self, requirements: &str) -> Result<WebsiteArtifact, EngineError> {
        let plan = self.analyzer.analyze(requirements).await?;
        info!(
            title = %plan.title,
            site_type = %plan.site_type,
            pages = plan.pages.len(),
            "Requirement analysis complete"
        );

        let (content, styles): (HashMap<String, PageContent>, String) = tokio::try_join!(
            self.content.generate(&plan),
            self.style.generate(&plan),
        )?;

        let html = self.html.generate(&plan, &content).await?;

        Ok(WebsiteArtifact {
            title: plan.title,
            description: plan.description,
            site_type: plan.site_type,
            pages: plan.pages,
            html,
            styles,
            content,
            metadata: ArtifactMetadata {
                created_at: Utc::now(),
                theme: plan.theme,
                palette: plan.palette,
            },
        })
    }
}

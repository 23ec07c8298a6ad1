//! Requirement analysis stage
//!
//! Turns a free-text requirement into a structured [`WebsitePlan`] with a
//! single model call. This is the one stage that must always yield a plan:
//! unparseable model output degrades to a fixed fallback plan instead of
//! failing the build, because every downstream stage needs *some* plan to
//! work from.

use std::sync::Arc;
use tracing::warn;

use crate::llm::{self, LLMProvider};
use sdk::errors::EngineError;
use sdk::types::WebsitePlan;

pub struct RequirementAnalyzer {
    provider: Arc<dyn LLMProvider>,
}

impl RequirementAnalyzer {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Analyze a requirement into a build plan.
    ///
    /// Fails only when the model call itself fails, or when the model
    /// returns no text at all. Anything the model does return becomes a
    /// plan, by fallback substitution if necessary.
    pub async fn analyze(&self, requirements: &str) -> Result<WebsitePlan, EngineError> {
        let prompt = build_analysis_prompt(requirements);
        let response = self.provider.complete(&prompt).await?;

        if response.trim().is_empty() {
            return Err(EngineError::EmptyResponse);
        }

        Ok(Self::parse_plan(&response, requirements))
    }

    /// Lenient plan parse with fallback substitution.
    ///
    /// Individually-missing fields are defaulted by the plan's serde
    /// shape; a response with no parseable JSON object at all yields
    /// [`WebsitePlan::fallback`]. Public so shape invariants can be
    /// exercised without a provider.
    pub fn parse_plan(response: &str, requirements: &str) -> WebsitePlan {
        let parsed = llm::extract_json_object(response)
            .and_then(|obj| serde_json::from_str::<WebsitePlan>(obj).ok());

        let mut plan = match parsed {
            Some(plan) => plan,
            None => {
                warn!("Analysis output was not parseable JSON, using fallback plan");
                return WebsitePlan::fallback(requirements);
            }
        };

        // Content and HTML generation iterate the page list; never let an
        // explicit empty array through.
        if plan.pages.is_empty() {
            plan.pages = WebsitePlan::default_pages();
        }

        // The title names the output directory.
        if plan.title.trim().is_empty() {
            plan.title = "Untitled Website".to_string();
        }

        plan
    }
}

fn build_analysis_prompt(requirements: &str) -> String {
    format!(
        r#"Analyze this website requirement and provide a structured plan in JSON format:

Requirements: {requirements}

Return a JSON object with these fields:
{{
  "title": "Website Title",
  "description": "Brief description",
  "siteType": "portfolio|business|ecommerce|blog|landing",
  "pages": ["page1", "page2"],
  "theme": "modern|classic|minimalist|colorful",
  "palette": ["color1", "color2", "color3"],
  "features": ["feature1", "feature2"],
  "contentStyle": "formal|casual|creative"
}}"#
    )
}

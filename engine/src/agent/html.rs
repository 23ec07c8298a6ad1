//! HTML generation stage
//!
//! One model call producing the site markup from the plan. The generated
//! page content is part of the stage's inputs but is not embedded in the
//! prompt; the markup is driven by the plan's title, type, and page list.
//! The response is passed through unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use crate::llm::LLMProvider;
use sdk::errors::EngineError;
use sdk::types::{PageContent, WebsitePlan};

pub struct HtmlGenerator {
    provider: Arc<dyn LLMProvider>,
}

impl HtmlGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Generate markup for the plan.
    pub async fn generate(
        &self,
        plan: &WebsitePlan,
        _content: &HashMap<String, PageContent>,
    ) -> Result<String, EngineError> {
        let prompt = build_html_prompt(plan);
        let html = self.provider.complete(&prompt).await?;
        Ok(html)
    }
}

fn build_html_prompt(plan: &WebsitePlan) -> String {
    format!(
        r#"Generate semantic HTML5 for a {site_type} website with these pages: {page_list}.

Website Title: {title}
Pages: {pages:?}
Type: {site_type}

Generate clean, semantic HTML5 with proper structure. Include meta tags, responsive viewport, and basic accessibility features.
Return ONLY the HTML code, no markdown or explanations."#,
        site_type = plan.site_type,
        page_list = plan.pages.join(", "),
        title = plan.title,
        pages = plan.pages,
    )
}

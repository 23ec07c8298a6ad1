//! Content generation stage
//!
//! One model call per page in the plan, issued concurrently. Content is
//! best effort: a page whose response cannot be parsed keeps the raw text
//! verbatim rather than blocking the build. A page whose *call* fails is
//! different — that fails the whole stage, and no partial mapping escapes.

use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::Arc;

use crate::llm::{self, LLMProvider};
use sdk::errors::EngineError;
use sdk::types::{PageContent, PageRecord, WebsitePlan};

pub struct ContentGenerator {
    provider: Arc<dyn LLMProvider>,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Generate content for every page in the plan.
    ///
    /// The result has exactly one entry per plan page, keyed by page
    /// identifier, so completion order is irrelevant.
    pub async fn generate(
        &self,
        plan: &WebsitePlan,
    ) -> Result<HashMap<String, PageContent>, EngineError> {
        let requests = plan.pages.iter().map(|page| {
            let provider = Arc::clone(&self.provider);
            let prompt = build_page_prompt(page, plan);
            let page = page.clone();
            async move {
                let response = provider.complete(&prompt).await?;
                Ok::<_, EngineError>((page, parse_page_content(&response)))
            }
        });

        let entries = try_join_all(requests).await?;
        Ok(entries.into_iter().collect())
    }
}

/// Structured parse with raw-text passthrough.
pub fn parse_page_content(response: &str) -> PageContent {
    match llm::extract_json_object(response)
        .and_then(|obj| serde_json::from_str::<PageRecord>(obj).ok())
    {
        Some(record) => PageContent::Structured(record),
        None => PageContent::Raw(response.to_string()),
    }
}

fn build_page_prompt(page: &str, plan: &WebsitePlan) -> String {
    format!(
        r#"Generate compelling {content_style} content for the "{page}" page of a {site_type} website.

Website Type: {site_type}
Page: {page}
Tone: {content_style}

Include:
- Page title
- Meta description
- Key sections with headings
- Body paragraphs
- Call-to-action

Return as JSON with keys: title, description, sections (array of {{heading, content}})"#,
        content_style = plan.content_style,
        site_type = plan.site_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_response_is_parsed() {
        let response = r#"{"title": "Home", "description": "Hi", "sections": [{"heading": "Hero", "content": "Welcome"}]}"#;
        match parse_page_content(response) {
            PageContent::Structured(record) => {
                assert_eq!(record.title, "Home");
                assert_eq!(record.sections.len(), 1);
                assert_eq!(record.sections[0].heading, "Hero");
            }
            PageContent::Raw(_) => panic!("expected structured content"),
        }
    }

    #[test]
    fn test_unparseable_response_is_kept_verbatim() {
        let response = "Welcome to our homepage! (no JSON here)";
        assert_eq!(
            parse_page_content(response),
            PageContent::Raw(response.to_string())
        );
    }

    #[test]
    fn test_empty_response_degrades_to_empty_raw() {
        assert_eq!(parse_page_content(""), PageContent::Raw(String::new()));
    }

    #[test]
    fn test_prompt_embeds_page_type_and_tone() {
        let plan = WebsitePlan {
            content_style: "casual".to_string(),
            ..WebsitePlan::default()
        };
        let prompt = build_page_prompt("menu", &plan);
        assert!(prompt.contains("\"menu\" page"));
        assert!(prompt.contains("of a landing website"));
        assert!(prompt.contains("Tone: casual"));
    }
}

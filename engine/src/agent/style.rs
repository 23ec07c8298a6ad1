//! Style generation stage
//!
//! One model call producing a stylesheet from the plan's theme and
//! palette. The response is opaque free-form text passed through
//! unchanged — no parsing, no validation.

use std::sync::Arc;

use crate::llm::LLMProvider;
use sdk::errors::EngineError;
use sdk::types::WebsitePlan;

pub struct StyleGenerator {
    provider: Arc<dyn LLMProvider>,
}

impl StyleGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Generate a stylesheet for the plan.
    pub async fn generate(&self, plan: &WebsitePlan) -> Result<String, EngineError> {
        let prompt = build_style_prompt(plan);
        let css = self.provider.complete(&prompt).await?;
        Ok(css)
    }
}

/// Prompt embedding theme, site type, and positional palette references.
///
/// Palettes shorter than three entries substitute empty strings for the
/// missing positions; the builder is total over any palette length.
pub fn build_style_prompt(plan: &WebsitePlan) -> String {
    let color = |i: usize| plan.palette.get(i).map(String::as_str).unwrap_or("");

    format!(
        r#"Generate a modern CSS stylesheet that combines Tailwind CSS utility classes and Bootstrap components for a {theme} themed website.

Color Palette: {palette}
Theme: {theme}
Type: {site_type}

Use:
- Tailwind CSS utility-first classes (e.g., flex, grid, m-4, p-6, text-lg)
- Bootstrap 5 component classes where appropriate (e.g., btn, btn-primary, container)
- CSS custom properties (variables) for the color palette
- Responsive design with Tailwind breakpoints (sm:, md:, lg:, xl:)
- Dark mode support using Tailwind's dark: prefix

Return complete CSS starting from:
:root {{
  --primary: {primary};
  --secondary: {secondary};
  --background: {background};
}}

Include utility classes for common components and ensure Bootstrap grid system integration."#,
        theme = plan.theme,
        palette = plan.palette.join(", "),
        site_type = plan.site_type,
        primary = color(0),
        secondary = color(1),
        background = color(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_full_palette_positionally() {
        let plan = WebsitePlan {
            theme: "classic".to_string(),
            palette: vec!["#111".to_string(), "#222".to_string(), "#333".to_string()],
            ..WebsitePlan::default()
        };
        let prompt = build_style_prompt(&plan);
        assert!(prompt.contains("Color Palette: #111, #222, #333"));
        assert!(prompt.contains("--primary: #111;"));
        assert!(prompt.contains("--secondary: #222;"));
        assert!(prompt.contains("--background: #333;"));
        assert!(prompt.contains("classic themed website"));
    }

    #[test]
    fn test_short_palette_substitutes_absent_positions() {
        let plan = WebsitePlan {
            palette: vec!["#111".to_string()],
            ..WebsitePlan::default()
        };
        let prompt = build_style_prompt(&plan);
        assert!(prompt.contains("--primary: #111;"));
        assert!(prompt.contains("--secondary: ;"));
        assert!(prompt.contains("--background: ;"));
    }

    #[test]
    fn test_empty_palette_does_not_panic() {
        let plan = WebsitePlan {
            palette: Vec::new(),
            ..WebsitePlan::default()
        };
        let prompt = build_style_prompt(&plan);
        assert!(prompt.contains("--primary: ;"));
    }
}

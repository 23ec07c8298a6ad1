//! Website Build Pipeline
//!
//! This module implements the four-stage pipeline that turns a free-text
//! requirement into a website artifact:
//!
//! 1. Requirement analysis → structured [`sdk::types::WebsitePlan`]
//! 2. Content generation, one call per page
//! 3. Style generation
//! 4. HTML generation
//!
//! Each stage issues calls through the [`crate::llm::LLMProvider`]
//! abstraction. Stages two and three depend only on the plan; stage four
//! also consumes the generated content. [`WebsiteBuilder`] sequences them
//! and assembles the final artifact.

pub mod analyzer;
pub mod content;
pub mod core;
pub mod html;
pub mod style;

pub use analyzer::RequirementAnalyzer;
pub use content::ContentGenerator;
pub use core::WebsiteBuilder;
pub use html::HtmlGenerator;
pub use style::StyleGenerator;

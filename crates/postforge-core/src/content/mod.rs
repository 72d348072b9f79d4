//! The content pipeline: prompt construction, tolerant JSON extraction from
//! model output, sanitization, and source-text summarization.

mod extract;
pub mod prompt;
mod sanitize;
mod summarize;

pub use extract::{extract_json, generated_content, rewritten_content, topic_suggestions};
pub use sanitize::{
    MIN_PLAIN_TEXT_CHARS, derive_title, plain_text_gate, sanitize_generated, strip_tags,
};
pub use summarize::summarize;

use thiserror::Error;

/// Failures of the content pipeline.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The model output held no parseable JSON, or a required key was missing.
    #[error("Invalid AI response format: {0}")]
    MalformedAiResponse(String),

    /// Stripped-of-markup content fell below the acceptance threshold.
    #[error("Content too short: {found} plain-text characters (minimum {min})")]
    ContentTooShort { found: usize, min: usize },
}

//! Ephemeral model-output records. None of these are persisted until a
//! handler turns them into a [`Post`](super::Post).

use serde::{Deserialize, Serialize};

/// A generated post as reported by the model: title, `<p>`/`<br>`-only HTML
/// content, and a length that defaults to the content's character count when
/// the model omits it.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
    pub length: u32,
}

/// The result of an editor-assist rewrite. Unlike [`GeneratedContent`] there
/// is no title; the caller keeps its own.
#[derive(Debug, Clone)]
pub struct RewrittenContent {
    pub content: String,
    pub length: u32,
}

/// One suggested topic with the model's shareability estimate (50-100 as
/// requested in the prompt; not validated locally).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSuggestion {
    pub name: String,
    pub virality: u32,
}

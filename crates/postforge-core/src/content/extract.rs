//! Tolerant JSON extraction from generative-model text output.
//!
//! Model responses may wrap their JSON in a markdown fence, surround it with
//! prose, or return it bare. The extractor finds the payload; the typed views
//! below enforce which keys are required per call site. Nested fences are not
//! supported; of multiple fenced blocks the first wins.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::ContentError;
use crate::domain::{GeneratedContent, RewrittenContent, TopicSuggestion};

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("hard-coded regex"))
}

/// Extract the JSON payload from raw model text.
///
/// A ```` ```json ```` fenced block is preferred; otherwise the trimmed whole
/// text, with any stray leading/trailing backticks removed, is parsed as-is.
pub fn extract_json(raw: &str) -> Result<Value, ContentError> {
    let candidate = match fence_re().captures(raw) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => raw.trim().trim_matches('`').trim(),
    };

    if candidate.is_empty() {
        return Err(ContentError::MalformedAiResponse(
            "empty response".to_string(),
        ));
    }

    serde_json::from_str(candidate).map_err(|e| ContentError::MalformedAiResponse(e.to_string()))
}

/// The model sometimes reports `length` as a number, sometimes as a numeric
/// string, sometimes not at all. Anything unusable falls back to the
/// character count of `content`.
fn length_or_default(length: Option<&Value>, content: &str) -> u32 {
    length
        .and_then(|v| {
            v.as_u64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .map_or_else(|| content.chars().count() as u32, |n| n as u32)
}

fn typed<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, ContentError> {
    serde_json::from_value(value).map_err(|e| ContentError::MalformedAiResponse(e.to_string()))
}

#[derive(Deserialize)]
struct RawGenerated {
    title: String,
    content: String,
    #[serde(default)]
    length: Option<Value>,
}

/// Typed view for the post-generation call sites: `title` and `content` are
/// required, `length` is repaired locally when missing.
pub fn generated_content(raw: &str) -> Result<GeneratedContent, ContentError> {
    let parsed: RawGenerated = typed(extract_json(raw)?)?;
    let length = length_or_default(parsed.length.as_ref(), &parsed.content);

    Ok(GeneratedContent {
        title: parsed.title,
        content: parsed.content,
        length,
    })
}

#[derive(Deserialize)]
struct RawRewritten {
    content: String,
    #[serde(default)]
    length: Option<Value>,
}

/// Typed view for the editor-assist call site: only `content` is required.
pub fn rewritten_content(raw: &str) -> Result<RewrittenContent, ContentError> {
    let parsed: RawRewritten = typed(extract_json(raw)?)?;
    let length = length_or_default(parsed.length.as_ref(), &parsed.content);

    Ok(RewrittenContent {
        content: parsed.content,
        length,
    })
}

#[derive(Deserialize)]
struct RawTopics {
    topics: Vec<TopicSuggestion>,
}

/// Typed view for the topic-suggestion call site.
pub fn topic_suggestions(raw: &str) -> Result<Vec<TopicSuggestion>, ContentError> {
    let parsed: RawTopics = typed(extract_json(raw)?)?;
    Ok(parsed.topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_with_surrounding_prose() {
        let raw = "Hello ```json\n{\"title\":\"A\",\"content\":\"<p>Hi</p>\",\"length\":2}\n``` bye";

        let generated = generated_content(raw).unwrap();
        assert_eq!(generated.title, "A");
        assert_eq!(generated.content, "<p>Hi</p>");
        assert_eq!(generated.length, 2);
    }

    #[test]
    fn bare_json_without_fence() {
        let raw = r#"{"title":"T","content":"<p>Body</p>"}"#;

        let generated = generated_content(raw).unwrap();
        assert_eq!(generated.title, "T");
        // No reported length: defaults to the content's character count.
        assert_eq!(generated.length, 11);
    }

    #[test]
    fn stray_backticks_are_stripped() {
        let raw = "```{\"title\":\"T\",\"content\":\"<p>Body</p>\",\"length\":5}```";

        assert_eq!(generated_content(raw).unwrap().length, 5);
    }

    #[test]
    fn prose_is_malformed() {
        let err = extract_json("not json at all").unwrap_err();
        assert!(matches!(err, ContentError::MalformedAiResponse(_)));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            extract_json("   "),
            Err(ContentError::MalformedAiResponse(_))
        ));
        assert!(matches!(
            extract_json("```json\n\n```"),
            Err(ContentError::MalformedAiResponse(_))
        ));
    }

    #[test]
    fn first_of_multiple_fences_wins() {
        let raw = "```json\n{\"title\":\"first\",\"content\":\"<p>1</p>\"}\n```\n\
                   ```json\n{\"title\":\"second\",\"content\":\"<p>2</p>\"}\n```";

        assert_eq!(generated_content(raw).unwrap().title, "first");
    }

    #[test]
    fn missing_required_key_is_not_defaulted() {
        let raw = "```json\n{\"content\":\"<p>No title</p>\"}\n```";

        assert!(matches!(
            generated_content(raw),
            Err(ContentError::MalformedAiResponse(_))
        ));
    }

    #[test]
    fn length_as_numeric_string_is_accepted() {
        let raw = r#"{"title":"T","content":"<p>Hi</p>","length":"42"}"#;

        assert_eq!(generated_content(raw).unwrap().length, 42);
    }

    #[test]
    fn rewritten_requires_only_content() {
        let raw = "```json\n{\"content\":\"<p>Rewritten</p>\"}\n```";

        let rewritten = rewritten_content(raw).unwrap();
        assert_eq!(rewritten.content, "<p>Rewritten</p>");
        assert_eq!(rewritten.length, 16);
    }

    #[test]
    fn topics_parse() {
        let raw = "```json\n{\"topics\":[{\"name\":\"Why AI wins\",\"virality\":88},\
                   {\"name\":\"Remote work myths\",\"virality\":72}]}\n```";

        let topics = topic_suggestions(raw).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "Why AI wins");
        assert_eq!(topics[1].virality, 72);
    }
}

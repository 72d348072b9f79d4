//! Post-processing of generated and hand-edited content: allowed-tag
//! enforcement, the plain-text acceptance gate, and fallback title
//! derivation.

use std::sync::OnceLock;

use regex::Regex;

use super::ContentError;

/// Minimum stripped-of-markup length for content to be accepted.
pub const MIN_PLAIN_TEXT_CHARS: usize = 30;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("hard-coded regex"))
}

fn allowed_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Only paragraph and line-break markers may survive into persistence.
    RE.get_or_init(|| Regex::new(r"(?i)^</?\s*(p|br)\s*/?>$").expect("hard-coded regex"))
}

/// Remove all HTML tags from a string.
pub fn strip_tags(text: &str) -> String {
    tag_re().replace_all(text, "").into_owned()
}

/// Enforce the allowed-markup policy on generated content: disallowed tags
/// are stripped (inner text kept), and literal square brackets are removed.
/// The brackets are template leakage - models occasionally echo the
/// `ALLOWED TAGS = [P, BR]` instruction into their output.
pub fn sanitize_generated(content: &str) -> String {
    let tags_cleaned = tag_re().replace_all(content, |caps: &regex::Captures<'_>| {
        let tag = caps.get(0).map_or("", |m| m.as_str());
        if allowed_tag_re().is_match(tag) {
            tag.to_string()
        } else {
            String::new()
        }
    });

    tags_cleaned.replace(['[', ']'], "")
}

/// The acceptance gate for content: after stripping all markup, at least
/// [`MIN_PLAIN_TEXT_CHARS`] characters must remain.
pub fn plain_text_gate(content: &str) -> Result<String, ContentError> {
    let plain = strip_tags(content).trim().to_string();
    let found = plain.chars().count();

    if found < MIN_PLAIN_TEXT_CHARS {
        return Err(ContentError::ContentTooShort {
            found,
            min: MIN_PLAIN_TEXT_CHARS,
        });
    }

    Ok(plain)
}

/// Derive a title from plain text: the first `max_words` whitespace-delimited
/// words joined by single spaces. Idempotent for a fixed input and policy.
pub fn derive_title(plain_text: &str, max_words: usize) -> String {
    plain_text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_removes_all_markup() {
        assert_eq!(strip_tags("<p>Hi <b>there</b></p><br>"), "Hi there");
    }

    #[test]
    fn empty_paragraph_is_rejected() {
        assert!(matches!(
            plain_text_gate("<p></p>"),
            Err(ContentError::ContentTooShort { found: 0, .. })
        ));
    }

    #[test]
    fn long_enough_content_is_accepted() {
        let plain = plain_text_gate("This is more than thirty characters of text.").unwrap();
        assert_eq!(plain, "This is more than thirty characters of text.");
    }

    #[test]
    fn gate_measures_stripped_length() {
        // 44 raw characters but only 5 outside markup.
        assert!(plain_text_gate("<p><br><p><br><p><br><p><br><p><br>short</p>").is_err());
    }

    #[test]
    fn sanitize_keeps_allowed_tags_only() {
        let dirty = "<p>Hello <strong>world</strong></p><br/><script>x</script>";
        assert_eq!(sanitize_generated(dirty), "<p>Hello world</p><br/>x");
    }

    #[test]
    fn sanitize_is_case_insensitive_for_allowed_tags() {
        assert_eq!(sanitize_generated("<P>Hi</P><BR>"), "<P>Hi</P><BR>");
    }

    #[test]
    fn sanitize_removes_bracket_leakage() {
        let dirty = "<p>[P, BR] Allowed tags leak into output</p>";
        assert_eq!(
            sanitize_generated(dirty),
            "<p>P, BR Allowed tags leak into output</p>"
        );
    }

    #[test]
    fn derive_title_takes_first_words() {
        let text = "AI will not replace you but it will change your work";
        assert_eq!(
            derive_title(text, 8),
            "AI will not replace you but it will"
        );
    }

    #[test]
    fn derive_title_is_idempotent() {
        let text = "Short and sharp hook";
        let once = derive_title(text, 8);
        assert_eq!(derive_title(&once, 8), once);
    }

    #[test]
    fn derive_title_normalizes_whitespace() {
        assert_eq!(derive_title("  spaced   out\ttitle ", 8), "spaced out title");
    }
}

//! Sentence-sampling reduction of long source material.
//!
//! Web pages and video transcripts can run far past what a prompt should
//! carry. Rather than truncating (which drops the conclusion), sentences are
//! sampled evenly from beginning, middle, and end.

/// Reduce `text` to at most `max_sentences` sentences. Text already within
/// budget is returned re-joined and unchanged in content.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = text
        .split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        return String::new();
    }

    if sentences.len() <= max_sentences {
        return format!("{}.", sentences.join(". ").trim_end_matches('.'));
    }

    let step = sentences.len() / max_sentences;
    let sampled: Vec<&str> = (0..max_sentences)
        .map(|i| sentences[(i * step).min(sentences.len() - 1)])
        .collect();

    format!("{}.", sampled.join(". ").trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        let text = "First sentence. Second sentence. Third";
        assert_eq!(
            summarize(text, 10),
            "First sentence. Second sentence. Third."
        );
    }

    #[test]
    fn long_text_is_sampled_evenly() {
        let text = (1..=100)
            .map(|i| format!("Sentence {i}"))
            .collect::<Vec<_>>()
            .join(". ");

        let summary = summarize(&text, 4);
        assert_eq!(
            summary,
            "Sentence 1. Sentence 26. Sentence 51. Sentence 76."
        );
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert_eq!(summarize("", 5), "");
        assert_eq!(summarize(" . . ", 5), "");
    }
}

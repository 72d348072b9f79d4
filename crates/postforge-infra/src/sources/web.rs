//! Web-page content extraction for the [`PageFetcher`] port.
//!
//! Pulls the readable text out of a page with focus on headings and main
//! body text: prefer `article`/`main` scopes over the whole document,
//! collect heading lines with `#` markers, paragraph and list-item text, and
//! text-heavy `div`s, deduplicated in order.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use postforge_core::ports::{PageFetcher, SourceError};

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Minimum text length for a bare `div` to count as substantial content.
const DIV_TEXT_THRESHOLD: usize = 100;

/// Reqwest + scraper page fetcher.
pub struct WebPageFetcher {
    client: reqwest::Client,
}

impl WebPageFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_UA)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

impl Default for WebPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract structured text from an HTML document. Returns an empty string
/// when nothing readable was found.
fn extract_readable(html: &str) -> String {
    let document = Html::parse_document(html);

    // Scope to the main content area when the page declares one.
    let scope = ["article", "main", "body"]
        .into_iter()
        .filter_map(|s| Selector::parse(s).ok())
        .find_map(|sel| document.select(&sel).next())
        .unwrap_or_else(|| document.root_element());

    let mut content: Vec<String> = Vec::new();

    // Headings, with their hierarchy marked.
    for level in 1..=6u8 {
        if let Ok(sel) = Selector::parse(&format!("h{level}")) {
            for heading in scope.select(&sel) {
                let text = collapse_whitespace(&element_text(heading));
                if !text.is_empty() {
                    content.push(format!("{} {}", "#".repeat(level as usize), text));
                }
            }
        }
    }

    // Paragraphs and list items.
    if let Ok(sel) = Selector::parse("p, li") {
        for paragraph in scope.select(&sel) {
            let text = collapse_whitespace(&element_text(paragraph));
            if !text.is_empty() {
                content.push(text);
            }
        }
    }

    // Bare divs that carry substantial text.
    if let Ok(sel) = Selector::parse("div") {
        for div in scope.select(&sel) {
            let text = collapse_whitespace(&element_text(div));
            if text.len() > DIV_TEXT_THRESHOLD {
                content.push(text);
            }
        }
    }

    // Deduplicate while preserving order.
    let mut seen = HashSet::new();
    let mut clean: Vec<String> = Vec::new();
    for item in content {
        if seen.insert(item.clone()) {
            clean.push(item);
        }
    }

    clean.join("\n").trim().to_string()
}

#[async_trait]
impl PageFetcher for WebPageFetcher {
    async fn extract(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        let html = response
            .text()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        let text = extract_readable(&html);
        if text.is_empty() {
            tracing::warn!(%url, "No readable content extracted from page");
            return Err(SourceError::Empty);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_article_scope_and_marks_headings() {
        let html = r#"
            <html><body>
                <nav><p>Skip this navigation chrome entirely</p></nav>
                <article>
                    <h1>Main Title</h1>
                    <h2>Sub Title</h2>
                    <p>First paragraph of the article body.</p>
                    <ul><li>A list item</li></ul>
                </article>
            </body></html>
        "#;

        let text = extract_readable(html);
        assert!(text.contains("# Main Title"));
        assert!(text.contains("## Sub Title"));
        assert!(text.contains("First paragraph of the article body."));
        assert!(text.contains("A list item"));
        assert!(!text.contains("navigation chrome"));
    }

    #[test]
    fn falls_back_to_body_and_deduplicates() {
        let html = r#"
            <html><body>
                <p>Repeated paragraph</p>
                <p>Repeated paragraph</p>
                <p>Unique paragraph</p>
            </body></html>
        "#;

        let text = extract_readable(html);
        assert_eq!(
            text.matches("Repeated paragraph").count(),
            1,
            "duplicates collapse to one entry"
        );
        assert!(text.contains("Unique paragraph"));
    }

    #[test]
    fn substantial_divs_are_included() {
        let long_line = "word ".repeat(30);
        let html = format!("<html><body><div>{long_line}</div><div>tiny</div></body></html>");

        let text = extract_readable(&html);
        assert!(text.contains(long_line.trim()));
        assert!(!text.contains("tiny"));
    }

    #[test]
    fn empty_page_extracts_nothing() {
        assert_eq!(extract_readable("<html><body></body></html>"), "");
    }
}

//! YouTube transcript fetching for the [`TranscriptFetcher`] port.
//!
//! YouTube exposes no official transcript API; like the widely-used
//! transcript libraries this adapter scrapes the watch page for the video's
//! caption-track URL and fetches the timedtext XML behind it.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;

use postforge_core::ports::{SourceError, TranscriptFetcher};

const WATCH_URL: &str = "https://www.youtube.com/watch";
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

fn video_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|v=|/embed/|/shorts/|/live/)([A-Za-z0-9_-]{11})")
            .expect("hard-coded regex")
    })
}

fn base_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""baseUrl":\s*"([^"]+)""#).expect("hard-coded regex"))
}

fn segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("hard-coded regex"))
}

/// Parse the 11-character video id out of the common YouTube URL forms
/// (watch, youtu.be, embed, shorts, live).
fn video_id(url: &str) -> Option<&str> {
    video_id_re()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Find the first caption track's timedtext URL in a watch-page document.
fn caption_track_url(watch_page: &str) -> Option<String> {
    let tracks_at = watch_page.find("\"captionTracks\":")?;
    let url = base_url_re()
        .captures(&watch_page[tracks_at..])?
        .get(1)?
        .as_str()
        .replace("\\u0026", "&");

    Some(url)
}

/// Decode the handful of entities timedtext XML actually emits.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Combine all transcript segments into a single string.
fn parse_timedtext(xml: &str) -> String {
    let segments: Vec<String> = segment_re()
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|s| !s.is_empty())
        .collect();

    segments.join(" ")
}

/// Scraping transcript fetcher.
pub struct YoutubeTranscriptFetcher {
    client: reqwest::Client,
}

impl YoutubeTranscriptFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_UA)
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, SourceError> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .text()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))
    }
}

impl Default for YoutubeTranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    async fn fetch(&self, video_url: &str) -> Result<String, SourceError> {
        let id = video_id(video_url)
            .ok_or_else(|| SourceError::InvalidUrl(video_url.to_string()))?;

        let watch_page = self.get_text(WATCH_URL, &[("v", id)]).await?;

        let track_url = caption_track_url(&watch_page).ok_or_else(|| {
            tracing::warn!(video = %id, "No caption tracks on watch page");
            SourceError::TranscriptUnavailable
        })?;

        let xml = self.get_text(&track_url, &[]).await?;

        let transcript = parse_timedtext(&xml);
        if transcript.is_empty() {
            return Err(SourceError::TranscriptUnavailable);
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_from_url_forms() {
        let id = "dQw4w9WgXcQ";

        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(video_id(url), Some(id), "failed for {url}");
        }

        assert_eq!(video_id("https://example.com/not-a-video"), None);
    }

    #[test]
    fn caption_track_url_unescapes_ampersands() {
        let page = r#"..."captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=en","name":"English"}]}}..."#;

        assert_eq!(
            caption_track_url(page).unwrap(),
            "https://www.youtube.com/api/timedtext?v=abc&lang=en"
        );
    }

    #[test]
    fn pages_without_captions_yield_none() {
        assert!(caption_track_url("<html>no captions here</html>").is_none());
    }

    #[test]
    fn timedtext_segments_join_with_spaces() {
        let xml = r#"<?xml version="1.0"?>
            <transcript>
                <text start="0.0" dur="1.5">Hello there</text>
                <text start="1.5" dur="2.0">it&#39;s a &amp; test</text>
                <text start="3.5" dur="1.0"></text>
            </transcript>"#;

        assert_eq!(parse_timedtext(xml), "Hello there it's a & test");
    }
}

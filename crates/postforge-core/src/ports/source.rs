//! Source-text fetch ports: web pages and video transcripts.

use async_trait::async_trait;

/// Fetches a web page and extracts its readable text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Extract structured text content from the page at `url`.
    async fn extract(&self, url: &str) -> Result<String, SourceError>;
}

/// Fetches the transcript of a hosted video.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript for the video at `video_url` as one string.
    async fn fetch(&self, video_url: &str) -> Result<String, SourceError>;
}

/// Upstream source failures. Callers treat all of these as "no usable
/// source text".
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to fetch source: {0}")]
    Fetch(String),

    #[error("No usable text found at source")]
    Empty,

    #[error("Transcript is disabled or unavailable for this video")]
    TranscriptUnavailable,

    #[error("Could not recognize video URL: {0}")]
    InvalidUrl(String),
}

//! Source-text adapters: web-page extraction and YouTube transcripts.

mod web;
mod youtube;

pub use web::WebPageFetcher;
pub use youtube::YoutubeTranscriptFetcher;

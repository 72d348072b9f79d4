//! Generative-AI service adapters.

mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

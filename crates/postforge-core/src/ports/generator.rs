//! Generative-text service port.

use async_trait::async_trait;

/// Abstraction over the external generative-text provider. One prompt in,
/// one raw text response out; callers own prompt construction and response
/// parsing. Implementations are stateless per request - no shared chat
/// session.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the model's raw text output.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// Generative-service errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Transport failure, provider error status, or timeout.
    #[error("Generation request failed: {0}")]
    Upstream(String),

    /// The provider answered but produced no usable text.
    #[error("Model returned an empty response")]
    EmptyResponse,
}

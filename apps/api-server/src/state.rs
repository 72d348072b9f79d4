//! Application state - shared across all handlers.

use std::sync::Arc;

use async_trait::async_trait;

use postforge_core::ports::{
    GeneratorError, IdentityVerifier, PageFetcher, PostRepository, TextGenerator,
    TranscriptFetcher, UserRepository,
};
use postforge_infra::ai::{GeminiClient, GeminiConfig};
use postforge_infra::auth::GoogleTokenVerifier;
use postforge_infra::database::{InMemoryPostRepository, InMemoryUserRepository};
use postforge_infra::sources::{WebPageFetcher, YoutubeTranscriptFetcher};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub generator: Arc<dyn TextGenerator>,
    pub pages: Arc<dyn PageFetcher>,
    pub transcripts: Arc<dyn TranscriptFetcher>,
    pub google: Option<Arc<dyn IdentityVerifier>>,
}

/// Generator used when no API key is configured: every generation request
/// fails upstream instead of the server refusing to boot.
struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Upstream(
            "GEMINI_API_KEY is not configured".to_string(),
        ))
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (users, posts) = Self::build_repositories(config).await;

        let generator: Arc<dyn TextGenerator> = match GeminiConfig::from_env() {
            Some(gemini) => {
                tracing::info!(model = %gemini.model, "Gemini generator configured");
                Arc::new(GeminiClient::new(gemini))
            }
            None => {
                tracing::warn!(
                    "GEMINI_API_KEY not set. Generation routes will fail until it is configured."
                );
                Arc::new(DisabledGenerator)
            }
        };

        let google = match GoogleTokenVerifier::from_env() {
            Some(verifier) => Some(Arc::new(verifier) as Arc<dyn IdentityVerifier>),
            None => {
                tracing::warn!("GOOGLE_CLIENT_ID not set. Google sign-in is disabled.");
                None
            }
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            generator,
            pages: Arc::new(WebPageFetcher::new()),
            transcripts: Arc::new(YoutubeTranscriptFetcher::new()),
            google,
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repositories(
        config: &AppConfig,
    ) -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        use postforge_infra::database::{
            DatabaseConnections, PostgresPostRepository, PostgresUserRepository,
        };

        if let Some(db_config) = &config.database {
            match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    let users: Arc<dyn UserRepository> =
                        Arc::new(PostgresUserRepository::new(connections.main.clone()));
                    let posts: Arc<dyn PostRepository> =
                        Arc::new(PostgresPostRepository::new(connections.main));
                    return (users, posts);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repositories(
        _config: &AppConfig,
    ) -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }
}

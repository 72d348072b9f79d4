//! # Postforge API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

use postforge_core::ports::{PasswordService, RateLimiter, TokenService};
use postforge_infra::auth::{Argon2PasswordService, JwtTokenService};
use postforge_infra::rate_limit::InMemoryRateLimiter;

use middleware::rate_limit::RateLimitMiddleware;
use middleware::request_id::RequestIdMiddleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Postforge API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state and services
    let state = AppState::new(&config).await;
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let limiter = build_rate_limiter().await;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(RateLimitMiddleware::new(limiter.clone()))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Redis-backed limiter when configured (counts are shared across
/// instances), per-process keyed limiter otherwise.
#[cfg(feature = "redis")]
async fn build_rate_limiter() -> Arc<dyn RateLimiter> {
    use postforge_infra::rate_limit::RedisRateLimiter;

    if std::env::var("REDIS_URL").is_ok() {
        match RedisRateLimiter::from_env().await {
            Ok(limiter) => return Arc::new(limiter),
            Err(e) => {
                tracing::error!("Failed to connect Redis rate limiter: {e}. Using in-memory.");
            }
        }
    }

    Arc::new(InMemoryRateLimiter::from_env())
}

#[cfg(not(feature = "redis"))]
async fn build_rate_limiter() -> Arc<dyn RateLimiter> {
    Arc::new(InMemoryRateLimiter::from_env())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,postforge_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

//! # Postforge Infrastructure
//!
//! Concrete implementations of the ports defined in `postforge-core`.
//! This crate contains database, authentication, rate-limiting, and external
//! service integrations (Gemini, Google sign-in, web pages, YouTube
//! transcripts).
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories and rate limiting only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `redis` - Redis-backed rate limiting shared across instances

pub mod ai;
pub mod auth;
pub mod database;
pub mod rate_limit;
pub mod sources;

pub use ai::{GeminiClient, GeminiConfig};
pub use auth::{Argon2PasswordService, GoogleTokenVerifier, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
pub use sources::{WebPageFetcher, YoutubeTranscriptFetcher};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

#[cfg(feature = "redis")]
pub use rate_limit::{RedisConfig, RedisRateLimitConfig, RedisRateLimiter};

//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postforge_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    Conflict(String),
    /// Stripped-of-markup content fell below the acceptance threshold.
    ContentTooShort(String),
    /// The page or transcript behind a create request could not be fetched.
    SourceUnavailable(String),
    /// The generative service failed or answered with something unusable.
    UpstreamAi(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ContentTooShort(msg) => write!(f, "Content too short: {}", msg),
            AppError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            AppError::UpstreamAi(msg) => write!(f, "Upstream AI failure: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ContentTooShort(_) => StatusCode::BAD_REQUEST,
            AppError::SourceUnavailable(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamAi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::Conflict(detail) => ErrorResponse::new(409, "Conflict").with_detail(detail),
            AppError::ContentTooShort(detail) => {
                ErrorResponse::new(400, "Content Too Short").with_detail(detail)
            }
            AppError::SourceUnavailable(detail) => {
                ErrorResponse::new(400, "Source Unavailable").with_detail(detail)
            }
            AppError::UpstreamAi(detail) => {
                // The provider's failure detail belongs in logs, not responses
                tracing::error!("Upstream AI failure: {}", detail);
                ErrorResponse::bad_gateway("Invalid AI response format")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain and port errors
impl From<postforge_core::error::RepoError> for AppError {
    fn from(err: postforge_core::error::RepoError) -> Self {
        match err {
            postforge_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            postforge_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            postforge_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            postforge_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<postforge_core::ContentError> for AppError {
    fn from(err: postforge_core::ContentError) -> Self {
        match err {
            postforge_core::ContentError::MalformedAiResponse(msg) => AppError::UpstreamAi(msg),
            too_short @ postforge_core::ContentError::ContentTooShort { .. } => {
                AppError::ContentTooShort(too_short.to_string())
            }
        }
    }
}

impl From<postforge_core::ports::GeneratorError> for AppError {
    fn from(err: postforge_core::ports::GeneratorError) -> Self {
        AppError::UpstreamAi(err.to_string())
    }
}

impl From<postforge_core::ports::SourceError> for AppError {
    fn from(err: postforge_core::ports::SourceError) -> Self {
        AppError::SourceUnavailable(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

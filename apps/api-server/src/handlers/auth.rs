//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use postforge_core::domain::User;
use postforge_core::ports::{AuthError, PasswordService, TokenService};
use postforge_shared::dto::{
    AuthResponse, GoogleAuthRequest, LoginRequest, RegisterUserRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if user already exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user
    let user = User::new(req.email.clone(), req.fullname, Some(password_hash));
    let saved_user = state.users.save(user).await?;

    // Generate token
    let token = token_service
        .generate_token(saved_user.id, &saved_user.email, vec!["user".to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
        profile: None,
        message: None,
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Find user by email
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Identity-provider accounts have no password to verify against
    let hash = user.password_hash.as_deref().ok_or(AppError::Unauthorized)?;

    let valid = password_service
        .verify(&req.password, hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    // Generate token
    let token = token_service
        .generate_token(user.id, &user.email, vec!["user".to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
        profile: None,
        message: None,
    }))
}

/// POST /api/auth/google
///
/// Verifies a Google ID token, creating the account on first sign-in.
pub async fn continue_with_google(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<GoogleAuthRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.token.trim().is_empty() {
        return Err(AppError::BadRequest("Google token is required".to_string()));
    }

    let verifier = state
        .google
        .as_ref()
        .ok_or_else(|| AppError::Internal("Google sign-in is not configured".to_string()))?;

    let identity = verifier.verify(&req.token).await.map_err(|e| match e {
        AuthError::ProviderUnreachable(msg) => AppError::Internal(msg),
        _ => AppError::BadRequest("Invalid token".to_string()),
    })?;

    // Get or create the user for this verified identity
    let (user, created) = match state.users.find_by_email(&identity.email).await? {
        Some(user) => (user, false),
        None => {
            let user = User::new(identity.email.clone(), identity.fullname.clone(), None);
            (state.users.save(user).await?, true)
        }
    };

    let token = token_service
        .generate_token(user.id, &user.email, vec!["user".to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
        profile: identity.picture,
        message: Some(if created {
            "User created".to_string()
        } else {
            "User logged in".to_string()
        }),
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse {
        fullname: user.fullname.clone(),
        username: user.username().to_string(),
        email: user.email,
    }))
}

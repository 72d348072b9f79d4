//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod topics;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/google", web::post().to(auth::continue_with_google))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes (all require a Bearer token via the Identity extractor)
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("/create-text", web::post().to(posts::create_from_topic))
                    .route("/create-url", web::post().to(posts::create_from_url))
                    .route("/create-youtube", web::post().to(posts::create_from_youtube))
                    .route("/save-editor", web::post().to(posts::save_editor))
                    .route("/edit-ai", web::post().to(posts::edit_ai))
                    .route("/topics", web::post().to(topics::suggest))
                    .route("/regenerate/{id}", web::post().to(posts::regenerate))
                    .route("/edit/{id}", web::post().to(posts::edit))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}

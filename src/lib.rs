use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use auth::rate_limit::RateLimiter;
use auth::session::Sessions;
use config::Config;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
    pub sessions: Sessions,
    pub rate_limiter: RateLimiter,
}

/// Build the full application router over the given state.
///
/// Transport-level layers (CORS, tracing) are added by the binary; tests
/// drive this router directly.
pub fn app(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::rate_limit::rate_limit_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(auth_routes);

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Check-ins
        .route("/api/mood-logs", post(handlers::mood_logs::create_mood_log))
        .route("/api/mood-logs", get(handlers::mood_logs::list_mood_logs))
        .route("/api/mood-logs/summary", get(handlers::mood_logs::mood_summary))
        // Companion chat
        .route("/api/chat/messages", get(handlers::chat::list_messages))
        .route("/api/chat/messages", post(handlers::chat::send_message))
        // Assessments
        .route(
            "/api/questionnaires",
            get(handlers::questionnaires::list_questionnaires),
        )
        .route(
            "/api/questionnaires",
            post(handlers::questionnaires::submit_questionnaire),
        )
        .route(
            "/api/questionnaires/phq9",
            get(handlers::questionnaires::phq9_metadata),
        )
        // Profile
        .route("/api/profile", get(handlers::profile::get_profile))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

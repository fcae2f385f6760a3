use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status
        .route("/", get(handlers::root_status))
        .route("/health", get(handlers::health_check))
        .route("/api/status", get(handlers::get_status))
        // Login
        .route("/api/qr", get(handlers::get_qr))
        // Messaging
        .route("/api/send-whatsapp", post(handlers::send_whatsapp))
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

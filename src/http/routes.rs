use std::path::Path;

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, audio_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session control
        .route(
            "/sessions/:session_id/start",
            post(handlers::start_interview),
        )
        .route(
            "/sessions/:session_id/answer",
            post(handlers::submit_answer),
        )
        .route("/sessions/:session_id/end", post(handlers::end_interview))
        .route(
            "/sessions/:session_id/reset",
            post(handlers::reset_session),
        )
        // Persisted snapshots
        .route("/interviews", get(handlers::list_snapshots))
        .route("/interviews/:snapshot_id", get(handlers::get_snapshot))
        // Synthesized question audio (mp3 downloads)
        .nest_service("/audio", ServeDir::new(audio_dir.as_ref()))
        // Browser clients are served from a different origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth endpoints (unguarded)
        .route("/api/v1/auth/register", post(crate::register))
        .route("/api/v1/auth/login", post(crate::login))
        // Snippet endpoints (guarded by the CurrentUser extractor)
        .route("/api/v1/snippets", post(crate::create_snippet))
        .route("/api/v1/snippets/review", get(crate::pick_for_review))
        .route("/api/v1/snippets/mine", get(crate::list_my_submissions))
        .route(
            "/api/v1/snippets/{id}/feedback",
            post(crate::submit_feedback),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

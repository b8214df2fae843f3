//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Spots
        .route("/spots", get(handlers::list_spots))
        .route("/spots/{spot_id}", get(handlers::get_spot))
        .route("/spots/{spot_id}/report", get(handlers::get_spot_report))
        .route("/spots/{spot_id}/live", get(handlers::get_live_spot_data))
        // Sessions
        .route("/sessions/public", get(handlers::list_public_sessions))
        .route("/sessions/user/{user_id}", get(handlers::list_user_sessions))
        .route("/sessions/{session_id}", get(handlers::get_session));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

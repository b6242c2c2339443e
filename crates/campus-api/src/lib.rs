//! Campus events: HTTP API.
//!
//! Thin axum layer over the engine crates: request bodies become commands,
//! outcomes become `{"success": ..., "message": ...}` bodies and protocol
//! errors become status codes.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use state::AppState;

/// Builds the full application router.
// TODO: Replace CorsLayer::permissive() with restricted origins for production.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::events::router())
        .merge(routes::venues::router())
        .merge(routes::notifications::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Service banner and health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Top-level collections exposed by the service.
#[derive(Serialize)]
pub struct Endpoints {
    /// Event catalog and registration.
    pub events: &'static str,
    /// Venue catalog, availability and booking.
    pub venues: &'static str,
    /// Notification sending and history.
    pub notifications: &'static str,
}

/// Banner returned from the root path.
#[derive(Serialize)]
pub struct BannerResponse {
    /// Service status.
    pub status: &'static str,
    /// Greeting.
    pub message: &'static str,
    /// Endpoint map.
    pub endpoints: Endpoints,
}

/// GET /
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        status: "healthy",
        message: "Campus Event Management API is running",
        endpoints: Endpoints {
            events: "/events",
            venues: "/venues",
            notifications: "/notifications",
        },
    })
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}

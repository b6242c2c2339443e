//! Campus events: API server entry point.

use std::sync::Arc;

use campus_api::config::ServerConfig;
use campus_api::error::AppError;
use campus_api::state::AppState;
use campus_api::{build_router, telemetry};
use campus_catalog::CatalogStore;
use campus_core::clock::SystemClock;
use campus_notification::NotificationLedger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    let telemetry = telemetry::init(&config)?;
    info!(
        otlp_export = telemetry.is_exporting(),
        "Starting campus events API server"
    );

    // Build application state.
    let app_state = AppState::new(
        Arc::new(CatalogStore::seeded()),
        Arc::new(NotificationLedger::new()),
        Arc::new(SystemClock),
    );

    let app = build_router(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let email = startup::setup_email_service(&config)?;

    let bind_address = config.bind_address;
    let state = AppState::new(db, config, http_client, email);

    let listener = TcpListener::bind(bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", bind_address, e)))?;

    tracing::info!("Starting server on {}", bind_address);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

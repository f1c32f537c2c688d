/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! The axum application exposing Oanda operations over HTTP

/// OpenAPI document
pub mod docs;
/// Request handlers
pub mod handlers;
/// Router construction and middleware
pub mod routes;
/// Shared handler state
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use crate::application::client::Client;
use crate::application::config::Config;
use crate::error::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Builds the Oanda client and serves the API until Ctrl-C
pub async fn serve(config: Config) -> Result<(), AppError> {
    let client = Client::new(config.clone())?;
    info!(
        "Oanda client initialized for {} environment",
        config.environment
    );

    let app = create_router(AppState::new(&config, Arc::new(client)));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#![recursion_limit = "256"]

mod config;
mod routes;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal in deployed environments.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "nyumba stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = HostConfig::from_env()?;
    if config.maps_api_key.is_none() {
        tracing::warn!("MAPS_API_KEY not set; location picker map disabled");
    }

    let app = routes::app(&config)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, maps = config.maps_api_key.is_some(), "nyumba listening");
    axum::serve(listener, app).await?;
    Ok(())
}

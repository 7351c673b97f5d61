use ipo_screener_data::{DataError, HttpPredictionProvider, ListingStore};
use ipo_screener_simulation::Simulator;
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::router;
use crate::state::AppState;

/// Failures during server startup.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Server configuration, read from the environment with local defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on (`LISTEN_ADDR`).
    pub listen_addr: String,
    /// Path to the e-IPO history CSV (`IPO_LISTINGS_CSV`).
    pub listings_csv: String,
    /// Base URL of the prediction service (`PREDICTOR_URL`).
    pub predictor_url: String,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".into()),
            listings_csv: env::var("IPO_LISTINGS_CSV").unwrap_or_else(|_| "data/e-ipo.csv".into()),
            predictor_url: env::var("PREDICTOR_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8001".into()),
        }
    }
}

/// Loads the listing data, wires the state and serves the API until the
/// process is stopped.
///
/// # Errors
/// Returns [`ServerError`] when the CSV cannot be loaded or the listen
/// address cannot be bound.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listings = ListingStore::from_csv_path(&config.listings_csv)?;
    let predictor = Arc::new(HttpPredictionProvider::new(config.predictor_url.clone()));
    let state = AppState::new(Simulator::idx(), listings, predictor);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, predictor = %config.predictor_url, "api listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

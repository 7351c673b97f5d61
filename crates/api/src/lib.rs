//! REST API for the IPO screener.
//!
//! Endpoints, all under `/api/v1`:
//! - `GET  /health`: liveness
//! - `GET  /listings`: filtered historical listing view
//! - `POST /simulations`: run the price-limit simulator
//! - `POST /predictions`: forward an offering to the prediction service
//!
//! The simulator core stays silent; request logging and error mapping happen
//! here. CORS is permissive because the consumer is a browser dashboard.

/// Error mapping onto HTTP statuses.
pub mod error;
/// API request/response models.
pub mod models;
/// Route definitions and handlers.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use server::{ServerConfig, ServerError, serve};
pub use state::AppState;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ipo_screener_data::ProviderError;
use ipo_screener_domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// API-level failures, mapped onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed domain validation.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The prediction service failed or answered garbage.
    #[error(transparent)]
    Prediction(#[from] ProviderError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Prediction(_) => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            warn!(error = %self, "upstream failure");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

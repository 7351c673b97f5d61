//! External prediction-service access.
//!
//! The service is an opaque collaborator: the screener submits an offering
//! profile and gets back a classification with per-class probabilities. The
//! trait seam keeps the API and CLI independent of the transport; the fixed
//! implementation stands in for the service in tests and demos.

mod prediction;

pub use prediction::{
    FixedPredictionProvider, HttpPredictionProvider, PredictionProvider, ProviderError,
    parse_prediction_payload,
};

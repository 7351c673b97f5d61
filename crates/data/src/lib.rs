//! Data access for the IPO screener.
//!
//! Two concerns live here, both thin:
//! - [`listings`]: the historical e-IPO table, loaded once from CSV and
//!   served as a read-and-filter view.
//! - [`providers`]: the external prediction service, consumed as an opaque
//!   request/response behind an async trait.

pub mod listings;
pub mod providers;

pub use listings::{DataError, ListingFilter, ListingStore};
pub use providers::{
    FixedPredictionProvider, HttpPredictionProvider, PredictionProvider, ProviderError,
    parse_prediction_payload,
};

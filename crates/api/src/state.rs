use ipo_screener_data::{ListingStore, PredictionProvider};
use ipo_screener_simulation::Simulator;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is immutable after startup, so handlers clone the state
/// freely and never coordinate.
#[derive(Clone)]
pub struct AppState {
    pub simulator: Arc<Simulator>,
    pub listings: Arc<ListingStore>,
    pub predictor: Arc<dyn PredictionProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(
        simulator: Simulator,
        listings: ListingStore,
        predictor: Arc<dyn PredictionProvider>,
    ) -> Self {
        Self {
            simulator: Arc::new(simulator),
            listings: Arc::new(listings),
            predictor,
        }
    }
}

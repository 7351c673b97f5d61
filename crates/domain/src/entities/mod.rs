pub mod listing;
pub mod offering;
pub mod prediction;

// Re-export for easier access
pub use listing::IpoListing;
pub use offering::OfferingProfile;
pub use prediction::{OfferingMetrics, OutcomePrediction, OutcomeProbabilities};

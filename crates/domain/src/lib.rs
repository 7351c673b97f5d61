//! Domain types for the IPO screener.
//!
//! This crate contains the business vocabulary shared by the simulator, the
//! data layer and the API:
//! - Value objects (prices, lot sizes, limit fractions, projections)
//! - The tiered daily price-band schedule and its resolver
//! - Valuation and offering-profile metrics
//! - Entities (IPO listings, offering profiles, outcome predictions)
//! - The input-validation error taxonomy

pub mod band;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod metrics;
pub mod value_objects;

pub use band::{BandSchedule, BandTier};
pub use enums::{Direction, OutcomeClass};
pub use errors::DomainError;

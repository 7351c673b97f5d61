//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ipo_screener_simulation::prelude::*;
//! ```

pub use crate::simulator::{SimulationRequest, Simulator};
pub use crate::trajectory::{PRICE_FLOOR, project};

pub use ipo_screener_domain::band::{BandSchedule, BandTier};
pub use ipo_screener_domain::enums::Direction;
pub use ipo_screener_domain::errors::DomainError;
pub use ipo_screener_domain::value_objects::{
    DayProjection, Horizon, LotSize, MAX_PROJECTION_DAYS, Percentage, Price, SimulationResult,
};

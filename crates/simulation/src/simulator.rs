//! Simulator facade: validates raw caller input, projects both directions.

use crate::trajectory::project;
use ipo_screener_domain::band::BandSchedule;
use ipo_screener_domain::enums::Direction;
use ipo_screener_domain::errors::DomainError;
use ipo_screener_domain::metrics::valuation::initial_capital;
use ipo_screener_domain::value_objects::{DayProjection, Horizon, LotSize, Price, SimulationResult};
use serde::{Deserialize, Serialize};

/// Raw caller input, as received over the API or CLI boundary.
///
/// Fields stay plain integers; validation happens in [`Simulator::run`], so
/// an out-of-contract value is rejected with a domain error rather than a
/// deserialization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Offering/settlement price the position was acquired at, whole rupiah.
    pub reference_price: i64,
    /// Position size in lots of 100 shares.
    pub lot_size: i64,
    /// Requested horizon in trading days; clamped to the regulatory window.
    pub horizon_days: i64,
}

/// The multi-day limit-move simulator.
///
/// Holds only the immutable band schedule, so a single instance is safe to
/// share and call concurrently.
#[derive(Debug, Clone)]
pub struct Simulator {
    schedule: BandSchedule,
}

impl Simulator {
    #[must_use]
    pub fn new(schedule: BandSchedule) -> Self {
        Self { schedule }
    }

    /// A simulator over the IDX auto-rejection schedule.
    #[must_use]
    pub fn idx() -> Self {
        Self::new(BandSchedule::idx_default())
    }

    #[must_use]
    pub fn schedule(&self) -> &BandSchedule {
        &self.schedule
    }

    /// Runs both limit-move paths for one request.
    ///
    /// # Errors
    /// Rejects the whole call, before any projection work, when the
    /// reference price is negative, the lot size is non-positive, or the
    /// horizon is non-positive. There is no partial result.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, DomainError> {
        let reference = Price::try_from(request.reference_price)?;
        let lot = LotSize::try_from(request.lot_size)?;
        let horizon = Horizon::try_from(request.horizon_days)?;

        let up_path = project(&self.schedule, reference, lot, horizon, Direction::Up);
        let down_path = project(&self.schedule, reference, lot, horizon, Direction::Down);

        Ok(SimulationResult {
            up_path,
            down_path,
            initial_capital: initial_capital(reference, lot),
        })
    }

    /// Projects a single direction from raw input.
    ///
    /// # Errors
    /// Same validation as [`Simulator::run`].
    pub fn project_path(
        &self,
        reference_price: i64,
        lot_size: i64,
        horizon_days: i64,
        direction: Direction,
    ) -> Result<Vec<DayProjection>, DomainError> {
        let reference = Price::try_from(reference_price)?;
        let lot = LotSize::try_from(lot_size)?;
        let horizon = Horizon::try_from(horizon_days)?;
        Ok(project(&self.schedule, reference, lot, horizon, direction))
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::idx()
    }
}

use crate::value_objects::percentage::Percentage;
use serde::{Deserialize, Serialize};

/// One projected trading day on a limit-move path.
///
/// Day `i`'s price is a pure function of day `i-1`'s price (or of the
/// reference price for day 1). Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProjection {
    /// 1-based day index.
    pub day: u32,
    /// Projected price at the end of the day.
    pub price: u64,
    /// The daily limit fraction that was applied to reach this price.
    pub limit: Percentage,
    /// Profit or loss against the reference price for the held position.
    pub pnl: i64,
}

/// The two limit-move paths produced by one simulator invocation.
///
/// Both paths have length equal to the clamped horizon. Constructed fresh per
/// invocation; identical inputs always yield an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Maximum-up path (ARA), day ascending.
    pub up_path: Vec<DayProjection>,
    /// Maximum-down path (ARB), day ascending.
    pub down_path: Vec<DayProjection>,
    /// Capital tied up at entry: reference price times shares held.
    pub initial_capital: u64,
}

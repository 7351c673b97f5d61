use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a projected limit-move path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Repeated maximum-up moves (ARA path).
    Up,
    /// Repeated maximum-down moves (ARB path).
    Down,
}

/// First-day outcome classes used by the prediction service and the
/// historical listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// Closed at or below the offering price.
    Loss,
    /// Closed above the offering price but below the upper band.
    Profit,
    /// Closed at or beyond a 20% first-day gain.
    BandUp,
}

impl OutcomeClass {
    /// Classifies a first-day return: >= 0.20 is a band-up close, anything
    /// positive below that is a profit, the rest is a loss.
    #[must_use]
    pub fn from_first_day_return(ret: Decimal) -> Self {
        let band_up_threshold = Decimal::new(20, 2);
        if ret >= band_up_threshold {
            Self::BandUp
        } else if ret > Decimal::ZERO {
            Self::Profit
        } else {
            Self::Loss
        }
    }
}

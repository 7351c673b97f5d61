use crate::enums::OutcomeClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Probability the prediction service assigns to each outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub loss: f64,
    pub profit: f64,
    pub band_up: f64,
}

impl OutcomeProbabilities {
    /// The class with the highest assigned probability.
    #[must_use]
    pub fn dominant_class(&self) -> OutcomeClass {
        let mut class = OutcomeClass::Loss;
        let mut best = self.loss;
        if self.profit > best {
            class = OutcomeClass::Profit;
            best = self.profit;
        }
        if self.band_up > best {
            class = OutcomeClass::BandUp;
        }
        class
    }
}

/// Metrics the service derives from the submitted offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingMetrics {
    pub offering_size_billion: Decimal,
    pub price_range_position: Decimal,
}

/// A resolved prediction for one offering.
///
/// The label is the service's display string and is carried opaquely; the
/// probabilities are the machine-readable part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrediction {
    pub label: String,
    pub probabilities: OutcomeProbabilities,
    pub metrics: OfferingMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_class_follows_the_largest_probability() {
        let probs = OutcomeProbabilities {
            loss: 0.2,
            profit: 0.5,
            band_up: 0.3,
        };
        assert_eq!(probs.dominant_class(), OutcomeClass::Profit);

        let probs = OutcomeProbabilities {
            loss: 0.1,
            profit: 0.3,
            band_up: 0.6,
        };
        assert_eq!(probs.dominant_class(), OutcomeClass::BandUp);
    }

    #[test]
    fn ties_resolve_to_the_earlier_class() {
        let probs = OutcomeProbabilities {
            loss: 0.4,
            profit: 0.4,
            band_up: 0.2,
        };
        assert_eq!(probs.dominant_class(), OutcomeClass::Loss);
    }
}

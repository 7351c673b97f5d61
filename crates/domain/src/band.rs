//! Tiered daily price-band schedule.
//!
//! The exchange caps how far a price may move in one session; the cap depends
//! on the price level itself. A schedule is an ordered set of tiers, each an
//! inclusive upper price bound with the limit fraction that applies up to it,
//! closed by one unbounded tier. Exactly one tier applies to any non-negative
//! price. Schedules are immutable configuration, never derived state.

use crate::errors::DomainError;
use crate::value_objects::percentage::Percentage;
use rust_decimal::Decimal;

/// One tier of a band schedule: the limit fraction applying to every price up
/// to `upper` (inclusive). `None` marks the terminal, unbounded tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandTier {
    pub upper: Option<u64>,
    pub limit: Percentage,
}

impl BandTier {
    #[must_use]
    pub fn bounded(upper: u64, limit: Percentage) -> Self {
        Self {
            upper: Some(upper),
            limit,
        }
    }

    #[must_use]
    pub fn unbounded(limit: Percentage) -> Self {
        Self { upper: None, limit }
    }
}

/// An ordered, validated set of band tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSchedule {
    tiers: Vec<BandTier>,
}

impl BandSchedule {
    /// Builds a schedule from tiers ordered by ascending bound.
    ///
    /// # Errors
    /// Rejects schedules that are empty, whose bounds are not strictly
    /// ascending, whose last tier is bounded (some price would have no tier),
    /// whose non-terminal tiers are unbounded, or whose fractions fall
    /// outside (0, 1].
    pub fn new(tiers: Vec<BandTier>) -> Result<Self, DomainError> {
        let Some((last, inner)) = tiers.split_last() else {
            return Err(DomainError::InvalidSchedule("schedule has no tiers"));
        };
        if last.upper.is_some() {
            return Err(DomainError::InvalidSchedule(
                "last tier must be unbounded so every price resolves",
            ));
        }
        let mut prev_upper: Option<u64> = None;
        for tier in inner {
            let Some(upper) = tier.upper else {
                return Err(DomainError::InvalidSchedule(
                    "only the last tier may be unbounded",
                ));
            };
            if prev_upper.is_some_and(|prev| upper <= prev) {
                return Err(DomainError::InvalidSchedule(
                    "tier bounds must be strictly ascending",
                ));
            }
            prev_upper = Some(upper);
        }
        for tier in &tiers {
            if tier.limit.0 <= Decimal::ZERO || tier.limit.0 > Decimal::ONE {
                return Err(DomainError::InvalidSchedule(
                    "limit fractions must be in (0, 1]",
                ));
            }
        }
        Ok(Self { tiers })
    }

    /// The IDX auto-rejection schedule: prices below 200 rupiah may move 35%
    /// a day, prices up to and including 5000 rupiah 25%, and everything
    /// above 5000 rupiah 20%. The boundary prices 200 and 5000 both take the
    /// lower fraction.
    #[must_use]
    pub fn idx_default() -> Self {
        Self {
            tiers: vec![
                BandTier::bounded(199, Percentage::from_bps(3500)),
                BandTier::bounded(5000, Percentage::from_bps(2500)),
                BandTier::unbounded(Percentage::from_bps(2000)),
            ],
        }
    }

    /// Resolves the daily limit fraction for a price. Total over all valid
    /// prices: the terminal tier catches everything the bounded tiers do not.
    #[must_use]
    pub fn resolve(&self, price: u64) -> Percentage {
        self.tiers
            .iter()
            .find(|tier| tier.upper.is_none_or(|upper| price <= upper))
            .map(|tier| tier.limit)
            .expect("validated schedule always ends in an unbounded tier")
    }

    /// Resolves a raw caller-supplied price, rejecting negative input.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPrice`] for negative prices.
    pub fn resolve_checked(&self, price: i64) -> Result<Percentage, DomainError> {
        if price < 0 {
            return Err(DomainError::InvalidPrice(price));
        }
        Ok(self.resolve(price as u64))
    }

    #[must_use]
    pub fn tiers(&self) -> &[BandTier] {
        &self.tiers
    }
}

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// A traded price in whole currency units (rupiah).
///
/// The exchange rule set operates on whole-unit prices, so no minor-unit
/// scaling is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: u64,
}

impl Price {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl TryFrom<i64> for Price {
    type Error = DomainError;

    /// Validates a raw caller-supplied price. Negative values are rejected;
    /// anything non-negative is a legal reference price, including zero.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw < 0 {
            return Err(DomainError::InvalidPrice(raw));
        }
        Ok(Self { value: raw as u64 })
    }
}

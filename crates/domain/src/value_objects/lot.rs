use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Tradable units per lot on the exchange.
pub const SHARES_PER_LOT: u64 = 100;

/// A held position size in lots. Immutable for the duration of a simulation
/// run; one lot is always [`SHARES_PER_LOT`] shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSize {
    pub value: u32,
}

impl LotSize {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Total shares held.
    #[must_use]
    pub fn shares(&self) -> u64 {
        u64::from(self.value) * SHARES_PER_LOT
    }
}

impl TryFrom<i64> for LotSize {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(DomainError::InvalidLotSize(raw));
        }
        let value = u32::try_from(raw).map_err(|_| DomainError::InvalidLotSize(raw))?;
        Ok(Self { value })
    }
}

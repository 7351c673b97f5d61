use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Upper bound on the projection horizon, in trading days.
///
/// Repeated limit moves beyond three trading weeks stop being a
/// regulatory-plausible scenario, so requests above this are clamped rather
/// than rejected. A business bound, not a performance limit.
pub const MAX_PROJECTION_DAYS: u32 = 15;

/// A validated projection horizon.
///
/// Construction rejects non-positive requests outright and clamps valid
/// requests to [`MAX_PROJECTION_DAYS`]; callers asking for 20 days get a
/// 15-entry projection, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub days: u32,
}

impl TryFrom<i64> for Horizon {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(DomainError::InvalidHorizon(raw));
        }
        let days = u32::try_from(raw)
            .unwrap_or(MAX_PROJECTION_DAYS)
            .min(MAX_PROJECTION_DAYS);
        Ok(Self { days })
    }
}

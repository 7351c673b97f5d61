use thiserror::Error;

/// Input-validation failures for the simulator core.
///
/// All variants are deterministic rejections of malformed input, raised
/// before any projection work begins. None of them is retryable and none can
/// occur mid-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A reference price was negative.
    #[error("price must be non-negative, got {0}")]
    InvalidPrice(i64),

    /// A requested horizon was non-positive (checked before clamping).
    #[error("horizon must be a positive number of days, got {0}")]
    InvalidHorizon(i64),

    /// A lot size was non-positive.
    #[error("lot size must be positive, got {0}")]
    InvalidLotSize(i64),

    /// A band schedule failed its construction invariants.
    #[error("invalid band schedule: {0}")]
    InvalidSchedule(&'static str),
}

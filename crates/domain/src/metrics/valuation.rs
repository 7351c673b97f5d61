//! Position valuation against the acquisition price.

use crate::value_objects::lot::LotSize;
use crate::value_objects::price::Price;

/// Profit or loss of a held position at a projected price, in whole currency
/// units: `(projected - reference) * shares held`.
///
/// Saturates at the `i64` bounds instead of wrapping; a 15-day compounded
/// projection from an extreme reference price can exceed them.
#[must_use]
pub fn position_pnl(projected: Price, reference: Price, lot: LotSize) -> i64 {
    let diff = i128::from(projected.value) - i128::from(reference.value);
    let pnl = diff * i128::from(lot.shares());
    i64::try_from(pnl).unwrap_or(if pnl < 0 { i64::MIN } else { i64::MAX })
}

/// Capital tied up at entry: `reference * shares held`. Saturating.
#[must_use]
pub fn initial_capital(reference: Price, lot: LotSize) -> u64 {
    let capital = u128::from(reference.value) * u128::from(lot.shares());
    u64::try_from(capital).unwrap_or(u64::MAX)
}

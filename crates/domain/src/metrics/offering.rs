//! Derived features of an offering, as consumed by the prediction service.

use rust_decimal::Decimal;

/// Gross offering size in billions of currency units:
/// `final_price * shares_offered / 1e9`.
#[must_use]
pub fn offering_size_billion(final_price: Decimal, shares_offered: u64) -> Decimal {
    final_price * Decimal::from(shares_offered) / Decimal::from(1_000_000_000u64)
}

/// Where the final price landed inside the book-building range, as a fraction
/// in [0, 1]. A degenerate range (high == low) counts as pricing at the top.
#[must_use]
pub fn price_range_position(final_price: Decimal, low: Decimal, high: Decimal) -> Decimal {
    let span = high - low;
    if span.is_zero() {
        return Decimal::ONE;
    }
    let position = (final_price - low) / span;
    position.clamp(Decimal::ZERO, Decimal::ONE)
}

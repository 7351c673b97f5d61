//! Per-direction trajectory engine.
//!
//! Each day resolves the band fraction against the price reached the
//! previous day, never against the original reference, so a path that
//! compounds across a tier boundary picks up the new fraction from that day
//! on. The projection is an explicit fold over day indices: day `i` depends
//! only on day `i-1`'s output.
//!
//! The down path is clamped to a hard floor of 50, the minimum tradable unit
//! price. Once the floor is hit the path keeps emitting floor-valued entries
//! for the remaining horizon rather than terminating early. The fraction
//! reported on those entries is whatever the resolver returns for 50 even
//! though the floor absorbs the decline; that mirrors the exchange-facing
//! display contract, quirk included.

use ipo_screener_domain::band::BandSchedule;
use ipo_screener_domain::enums::Direction;
use ipo_screener_domain::metrics::valuation::position_pnl;
use ipo_screener_domain::value_objects::{DayProjection, Horizon, LotSize, Percentage, Price};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Minimum tradable unit price; the down path never projects below this.
pub const PRICE_FLOOR: u64 = 50;

/// Projects one limit-move path over the given horizon.
///
/// Inputs arrive pre-validated as domain types, so this function is total:
/// it always yields exactly `horizon.days` entries, ordered by day ascending.
#[must_use]
pub fn project(
    schedule: &BandSchedule,
    reference: Price,
    lot: LotSize,
    horizon: Horizon,
    direction: Direction,
) -> Vec<DayProjection> {
    (1..=horizon.days)
        .scan(reference.value, |current, day| {
            let limit = schedule.resolve(*current);
            let next = match direction {
                Direction::Up => step_up(*current, limit),
                Direction::Down => step_down(*current, limit),
            };
            *current = next;
            Some(DayProjection {
                day,
                price: next,
                limit,
                pnl: position_pnl(Price::new(next), reference, lot),
            })
        })
        .collect()
}

fn step_up(current: u64, limit: Percentage) -> u64 {
    let next = Decimal::from(current) * (Decimal::ONE + limit.0);
    next.floor().to_u64().unwrap_or(u64::MAX)
}

fn step_down(current: u64, limit: Percentage) -> u64 {
    let next = Decimal::from(current) * (Decimal::ONE - limit.0);
    next.floor().to_u64().unwrap_or(0).max(PRICE_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn idx() -> BandSchedule {
        BandSchedule::idx_default()
    }

    fn horizon(days: i64) -> Horizon {
        Horizon::try_from(days).unwrap()
    }

    #[test]
    fn first_up_day_from_635() {
        let path = project(
            &idx(),
            Price::new(635),
            LotSize::new(4),
            horizon(1),
            Direction::Up,
        );
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].day, 1);
        assert_eq!(path[0].limit.0, dec!(0.25));
        assert_eq!(path[0].price, 793); // floor(635 * 1.25)
        assert_eq!(path[0].pnl, 63_200);
    }

    #[test]
    fn first_down_day_from_635() {
        let path = project(
            &idx(),
            Price::new(635),
            LotSize::new(4),
            horizon(1),
            Direction::Down,
        );
        assert_eq!(path[0].limit.0, dec!(0.25));
        assert_eq!(path[0].price, 476); // floor(635 * 0.75)
        assert_eq!(path[0].pnl, -63_600);
    }

    #[test]
    fn up_path_compounds_on_the_previous_day() {
        let path = project(
            &idx(),
            Price::new(635),
            LotSize::new(1),
            horizon(3),
            Direction::Up,
        );
        let prices: Vec<u64> = path.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![793, 991, 1238]);
    }

    #[test]
    fn band_is_recomputed_when_a_path_crosses_a_tier_boundary() {
        let path = project(
            &idx(),
            Price::new(4000),
            LotSize::new(1),
            horizon(3),
            Direction::Up,
        );
        // 4000 is in the 25% tier; 5000 still is (inclusive bound); 6250 is not.
        assert_eq!(path[0].price, 5000);
        assert_eq!(path[1].limit.0, dec!(0.25));
        assert_eq!(path[1].price, 6250);
        assert_eq!(path[2].limit.0, dec!(0.20));
        assert_eq!(path[2].price, 7500);
    }

    #[test]
    fn down_path_clamps_to_the_floor_and_holds_there() {
        let path = project(
            &idx(),
            Price::new(60),
            LotSize::new(1),
            horizon(4),
            Direction::Down,
        );
        // floor(60 * 0.65) = 39, clamped up to 50; held thereafter.
        assert_eq!(path[0].limit.0, dec!(0.35));
        assert_eq!(path[0].price, 50);
        for entry in &path[1..] {
            assert_eq!(entry.price, 50);
            // The resolver still reports the sub-200 fraction at the floor.
            assert_eq!(entry.limit.0, dec!(0.35));
        }
    }

    #[test]
    fn up_path_never_decreases_and_down_path_never_increases() {
        let reference = Price::new(300);
        let lot = LotSize::new(2);
        let up = project(&idx(), reference, lot, horizon(15), Direction::Up);
        let down = project(&idx(), reference, lot, horizon(15), Direction::Down);

        let mut prev = reference.value;
        for entry in &up {
            assert!(entry.price >= prev);
            prev = entry.price;
        }

        let mut prev = reference.value;
        for entry in &down {
            assert!(entry.price <= prev);
            assert!(entry.price >= PRICE_FLOOR);
            prev = entry.price;
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let reference = Price::new(1234);
        let lot = LotSize::new(7);
        let first = project(&idx(), reference, lot, horizon(10), Direction::Down);
        let second = project(&idx(), reference, lot, horizon(10), Direction::Down);
        assert_eq!(first, second);
    }

    #[test]
    fn day_indices_are_one_based_and_ascending() {
        let path = project(
            &idx(),
            Price::new(500),
            LotSize::new(1),
            horizon(5),
            Direction::Up,
        );
        let days: Vec<u32> = path.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
    }
}

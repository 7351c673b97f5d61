pub mod offering;
pub mod valuation;

pub use offering::{offering_size_billion, price_range_position};
pub use valuation::{initial_capital, position_pnl};

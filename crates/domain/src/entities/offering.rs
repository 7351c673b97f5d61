use crate::metrics::offering::{offering_size_billion, price_range_position};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The parameters of a new offering, as submitted to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingProfile {
    pub ticker: String,
    /// Final offering price in rupiah.
    pub final_price: Decimal,
    pub shares_offered: u64,
    /// Lowest book-building price.
    pub low_price: Decimal,
    /// Highest book-building price.
    pub high_price: Decimal,
    pub has_warrant: bool,
    pub lead_underwriter: String,
    pub sector: String,
    pub is_oversubscribed: bool,
}

impl OfferingProfile {
    /// Gross offering size in billions of rupiah.
    #[must_use]
    pub fn offering_size_billion(&self) -> Decimal {
        offering_size_billion(self.final_price, self.shares_offered)
    }

    /// Final price position inside the book-building range, in [0, 1].
    #[must_use]
    pub fn price_range_position(&self) -> Decimal {
        price_range_position(self.final_price, self.low_price, self.high_price)
    }
}

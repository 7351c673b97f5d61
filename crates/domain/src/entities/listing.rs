use crate::enums::OutcomeClass;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// One historical IPO as listed on the exchange.
///
/// Numeric and date fields are `None` when the source data could not be
/// parsed; the view layer renders those as placeholders rather than dropping
/// the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpoListing {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    /// Final offering price in whole rupiah.
    pub final_price: Option<u64>,
    pub listing_date: Option<NaiveDate>,
    /// First-day return as a fraction (0.10 == +10%).
    pub return_d1: Option<Decimal>,
    /// Comma-separated underwriter codes as published.
    pub underwriters: String,
}

impl IpoListing {
    /// The lead underwriter: first code of the published comma-separated
    /// list, e.g. `"CC,LG,YP"` -> `"CC"`.
    #[must_use]
    pub fn lead_underwriter(&self) -> &str {
        self.underwriters
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
    }

    /// First-day closing price implied by the offering price and the
    /// first-day return, rounded to whole rupiah.
    #[must_use]
    pub fn d1_close_price(&self) -> Option<u64> {
        let final_price = self.final_price?;
        let ret = self.return_d1?;
        let close = Decimal::from(final_price) * (Decimal::ONE + ret);
        close.round().to_u64()
    }

    /// First-day outcome class, when the return is known.
    #[must_use]
    pub fn outcome(&self) -> Option<OutcomeClass> {
        self.return_d1.map(OutcomeClass::from_first_day_return)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing() -> IpoListing {
        IpoListing {
            ticker: "SUPA".into(),
            company_name: "Superior Prima Sukses".into(),
            sector: "Basic Materials".into(),
            final_price: Some(635),
            listing_date: NaiveDate::from_ymd_opt(2024, 10, 8),
            return_d1: Some(dec!(0.25)),
            underwriters: "CC, LG,YP".into(),
        }
    }

    #[test]
    fn lead_underwriter_is_the_first_code() {
        assert_eq!(listing().lead_underwriter(), "CC");
    }

    #[test]
    fn d1_close_rounds_to_whole_rupiah() {
        let mut l = listing();
        assert_eq!(l.d1_close_price(), Some(794));

        l.return_d1 = Some(dec!(-0.1));
        assert_eq!(l.d1_close_price(), Some(572)); // 571.5 rounds half-even up
    }

    #[test]
    fn derived_fields_are_none_without_source_data() {
        let mut l = listing();
        l.return_d1 = None;
        assert_eq!(l.d1_close_price(), None);
        assert_eq!(l.outcome(), None);
    }

    #[test]
    fn outcome_tracks_the_first_day_return() {
        assert_eq!(listing().outcome(), Some(OutcomeClass::BandUp));
    }
}

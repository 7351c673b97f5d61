use chrono::NaiveDate;
use ipo_screener_domain::entities::IpoListing;
use ipo_screener_domain::enums::OutcomeClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Query parameters for the listing view.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    pub search: Option<String>,
    pub sector: Option<String>,
}

/// One listing row as rendered by the dashboard, derived fields included.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub final_price: Option<u64>,
    pub listing_date: Option<NaiveDate>,
    pub return_d1: Option<Decimal>,
    pub underwriters: String,
    pub lead_underwriter: String,
    pub d1_close_price: Option<u64>,
    pub outcome: Option<OutcomeClass>,
}

impl From<&IpoListing> for ListingView {
    fn from(listing: &IpoListing) -> Self {
        Self {
            ticker: listing.ticker.clone(),
            company_name: listing.company_name.clone(),
            sector: listing.sector.clone(),
            final_price: listing.final_price,
            listing_date: listing.listing_date,
            return_d1: listing.return_d1,
            underwriters: listing.underwriters.clone(),
            lead_underwriter: listing.lead_underwriter().to_owned(),
            d1_close_price: listing.d1_close_price(),
            outcome: listing.outcome(),
        }
    }
}

/// The listing view envelope.
#[derive(Debug, Serialize)]
pub struct ListListingsResponse {
    pub total: usize,
    pub listings: Vec<ListingView>,
}

//! CSV-backed listing store.
//!
//! Loads the published e-IPO history once at startup and serves it as an
//! immutable, filterable view. Field coercion is lenient: unparseable
//! prices, returns and dates become `None` and the row is kept; duplicate
//! tickers keep their first occurrence.

use chrono::NaiveDate;
use ipo_screener_domain::entities::IpoListing;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Failures while loading the listing CSV.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open listing csv: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse listing csv: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the e-IPO sheet, as published. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawListingRow {
    #[serde(rename = "Ticker Code")]
    ticker: String,
    #[serde(rename = "Company Name")]
    company_name: String,
    #[serde(rename = "Sector", default)]
    sector: String,
    #[serde(rename = "Final Price (Rp)", default)]
    final_price: String,
    #[serde(rename = "Listing Date", default)]
    listing_date: String,
    #[serde(rename = "Return D1", default)]
    return_d1: String,
    #[serde(rename = "Underwriter(s)", default)]
    underwriters: String,
}

impl RawListingRow {
    fn into_listing(self) -> IpoListing {
        IpoListing {
            ticker: self.ticker.trim().to_owned(),
            company_name: self.company_name.trim().to_owned(),
            sector: self.sector.trim().to_owned(),
            final_price: parse_price(&self.final_price),
            listing_date: parse_date(&self.listing_date),
            return_d1: parse_return(&self.return_d1),
            underwriters: self.underwriters.trim().to_owned(),
        }
    }
}

fn parse_price(raw: &str) -> Option<u64> {
    use rust_decimal::prelude::ToPrimitive;
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).ok()?.round().to_u64()
}

fn parse_return(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // The sheet has carried both ISO and day-first forms over the years.
    ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// The immutable set of historical listings.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<IpoListing>,
}

impl ListingStore {
    /// Loads a store from a CSV file on disk.
    ///
    /// # Errors
    /// Returns [`DataError`] when the file cannot be opened or a row cannot
    /// be read at all. Per-field coercion failures do not error.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let file = File::open(path.as_ref())?;
        let store = Self::from_reader(file)?;
        tracing::info!(
            records = store.len(),
            path = %path.as_ref().display(),
            "listing data loaded"
        );
        Ok(store)
    }

    /// Loads a store from any CSV reader.
    ///
    /// # Errors
    /// Returns [`DataError`] when a row cannot be deserialized.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut listings = Vec::new();
        for row in csv_reader.deserialize::<RawListingRow>() {
            let listing = row?.into_listing();
            if seen.insert(listing.ticker.clone()) {
                listings.push(listing);
            }
        }
        Ok(Self { listings })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn all(&self) -> &[IpoListing] {
        &self.listings
    }

    /// Applies a filter, preserving sheet order.
    #[must_use]
    pub fn filter(&self, filter: &ListingFilter) -> Vec<&IpoListing> {
        self.listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .collect()
    }
}

/// Search criteria for the listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Case-insensitive substring over ticker and company name.
    pub search: Option<String>,
    /// Case-insensitive exact sector match.
    pub sector: Option<String>,
}

impl ListingFilter {
    #[must_use]
    pub fn matches(&self, listing: &IpoListing) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = listing.ticker.to_lowercase().contains(&term)
                || listing.company_name.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(sector) = &self.sector {
            if !listing.sector.eq_ignore_ascii_case(sector) {
                return false;
            }
        }
        true
    }
}

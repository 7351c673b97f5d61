//! Command Line Interface for the IPO screener.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use ipo_screener_api::{ServerConfig, serve};
use ipo_screener_data::{HttpPredictionProvider, ListingFilter, ListingStore, PredictionProvider};
use ipo_screener_domain::entities::OfferingProfile;
use ipo_screener_domain::value_objects::DayProjection;
use ipo_screener_simulation::{SimulationRequest, Simulator};
use prettytable::{Table, row};
use rust_decimal::Decimal;
use std::env;

#[derive(Parser)]
#[command(name = "ipo-screener")]
#[command(about = "IPO screening toolkit: limit-move simulator, listing view, prediction gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project repeated daily limit moves from a reference price
    Simulate {
        /// Offering/settlement price in whole rupiah
        #[arg(short, long)]
        price: i64,

        /// Position size in lots of 100 shares
        #[arg(short, long, default_value_t = 1)]
        lots: i64,

        /// Trading days to project (clamped to 15)
        #[arg(short, long, default_value_t = 3)]
        days: i64,
    },
    /// Show the historical e-IPO listing table
    Listings {
        /// Path to the e-IPO history CSV
        #[arg(long, default_value = "data/e-ipo.csv")]
        csv: String,

        /// Substring to match against ticker or company name
        #[arg(short, long)]
        search: Option<String>,

        /// Exact sector to filter on
        #[arg(long)]
        sector: Option<String>,
    },
    /// Ask the prediction service to classify a new offering
    Predict {
        /// Ticker code
        #[arg(short, long)]
        ticker: String,

        /// Final offering price in rupiah
        #[arg(long)]
        final_price: Decimal,

        /// Number of shares offered
        #[arg(long)]
        shares_offered: u64,

        /// Lowest book-building price
        #[arg(long)]
        low_price: Decimal,

        /// Highest book-building price
        #[arg(long)]
        high_price: Decimal,

        /// Offering includes warrants
        #[arg(long)]
        has_warrant: bool,

        /// Lead underwriter code
        #[arg(long)]
        lead_underwriter: String,

        /// Sector name
        #[arg(long)]
        sector: String,

        /// Book building was oversubscribed
        #[arg(long)]
        is_oversubscribed: bool,
    },
    /// Run the REST API server
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { price, lots, days } => {
            let request = SimulationRequest {
                reference_price: price,
                lot_size: lots,
                horizon_days: days,
            };
            let result = Simulator::idx().run(&request)?;

            println!(
                "Initial capital: Rp {} ({} lots at Rp {})",
                result.initial_capital, lots, price
            );
            println!("\nARA scenario (maximum up):");
            projection_table(&result.up_path).printstd();
            println!("\nARB scenario (maximum down):");
            projection_table(&result.down_path).printstd();
        }
        Commands::Listings {
            csv,
            search,
            sector,
        } => {
            let store = ListingStore::from_csv_path(&csv)?;
            let filter = ListingFilter { search, sector };
            let hits = store.filter(&filter);

            let mut table = Table::new();
            table.add_row(row![
                "Ticker", "Company", "Sector", "Price", "Listed", "Return D1", "D1 Close", "Lead UW"
            ]);
            for listing in &hits {
                table.add_row(row![
                    listing.ticker,
                    listing.company_name,
                    listing.sector,
                    optional(listing.final_price),
                    optional(listing.listing_date),
                    optional(listing.return_d1),
                    optional(listing.d1_close_price()),
                    listing.lead_underwriter(),
                ]);
            }
            table.printstd();
            println!("{} of {} listings", hits.len(), store.len());
        }
        Commands::Predict {
            ticker,
            final_price,
            shares_offered,
            low_price,
            high_price,
            has_warrant,
            lead_underwriter,
            sector,
            is_oversubscribed,
        } => {
            let url = env::var("PREDICTOR_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8001".into());
            let provider = HttpPredictionProvider::new(url);

            let offering = OfferingProfile {
                ticker,
                final_price,
                shares_offered,
                low_price,
                high_price,
                has_warrant,
                lead_underwriter,
                sector,
                is_oversubscribed,
            };
            let prediction = provider.predict(&offering).await?;

            println!("Prediction: {}", prediction.label);
            let mut table = Table::new();
            table.add_row(row!["Loss", "Profit", "Band up"]);
            table.add_row(row![
                format!("{:.1}%", prediction.probabilities.loss * 100.0),
                format!("{:.1}%", prediction.probabilities.profit * 100.0),
                format!("{:.1}%", prediction.probabilities.band_up * 100.0),
            ]);
            table.printstd();
            println!(
                "Offering size: Rp {} B, price position {}",
                prediction.metrics.offering_size_billion, prediction.metrics.price_range_position
            );
        }
        Commands::Serve => {
            serve(ServerConfig::from_env()).await?;
        }
    }

    Ok(())
}

fn projection_table(path: &[DayProjection]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Day", "Limit", "Price", "PnL"]);
    for entry in path {
        table.add_row(row![
            entry.day,
            format!("{}%", entry.limit.0 * Decimal::from(100)),
            entry.price,
            entry.pnl,
        ]);
    }
    table
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".into(), |v| v.to_string())
}

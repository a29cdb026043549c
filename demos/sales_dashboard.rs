//! End-to-end dashboard flow: load a sales export, complete setup, and
//! print the KPI panel plus the sales trend forecast as JSON.
//!
//! Usage: cargo run --example sales_dashboard -- path/to/sales.csv

use sales_trend::app::AppState;
use sales_trend::data::{Metric, SalesLoader};
use sales_trend::error::ForecastError;

fn main() -> sales_trend::Result<()> {
    let path = std::env::args().nth(1).ok_or_else(|| {
        ForecastError::InvalidInput("Usage: sales_dashboard <sales.csv>".to_string())
    })?;

    let records = SalesLoader::from_csv(&path)?;
    println!("Loaded {} records from {}", records.len(), path);

    let state = AppState::new().complete_setup(records)?;
    let dashboard = state.dashboard().expect("setup just completed");
    let all_records = dashboard.records().to_vec();

    let kpis = dashboard.kpis(&all_records, 6)?;
    println!("KPIs: {}", serde_json::to_string_pretty(&kpis).expect("serializable"));

    match dashboard.sales_trend(&all_records, Metric::TotalSales, 6) {
        Ok(trend) => {
            println!("Model: {}", trend.model_name);
            println!("{}", trend.metrics);
            println!(
                "Forecast: {}",
                serde_json::to_string_pretty(&trend.future).expect("serializable")
            );
        }
        Err(ForecastError::InsufficientData { got, need }) => {
            println!(
                "Not enough history to forecast ({} month(s), need {})",
                got, need
            );
        }
        Err(err) => return Err(err),
    }

    Ok(())
}

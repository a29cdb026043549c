//! Minimal forecasting example: build a monthly series by hand, run the
//! adaptive forecaster, and print the fitted trend and future months.

use sales_trend::forecaster::forecast_default;
use sales_trend::series::MonthlySeries;

fn main() -> sales_trend::Result<()> {
    let series = MonthlySeries::from_pairs(&[
        ("2023-07", 3200.0),
        ("2023-08", 3420.0),
        ("2023-09", 3610.0),
        ("2023-10", 3550.0),
        ("2023-11", 3890.0),
        ("2023-12", 4120.0),
    ])?;

    let result = forecast_default(&series)?;

    println!("Model: {}", result.model_name);
    println!("{}", result.metrics);

    println!("History (actual vs fitted):");
    for (point, fitted) in result.history.iter().zip(result.fitted.iter()) {
        println!(
            "  {}  actual {:>10.2}  fitted {:>10.2}",
            point.period, point.value, fitted
        );
    }

    println!("Forecast:");
    for point in &result.future {
        println!("  {}  {:>10.2}", point.period, point.value);
    }

    Ok(())
}

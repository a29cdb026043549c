//! Sales export ingestion and monthly aggregation
//!
//! Raw exports arrive with inconsistent headers ("Gross income", "Tax 5%").
//! Headers are normalized before lookup: trimmed, lowercased, spaces to
//! underscores, `%` to `p`, and `gross_income` renamed to `profit`. Rows
//! whose date or numeric fields fail to parse are dropped, not reported;
//! the loader favors getting a usable series out of a messy export.

use crate::error::{ForecastError, Result};
use crate::series::{MonthlySeries, Period};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Date formats accepted in the export's date column
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// One cleaned sales transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    /// Transaction date
    pub date: NaiveDate,
    /// City of the branch, empty when the export has no such column
    pub city: String,
    /// Branch identifier, empty when the export has no such column
    pub branch: String,
    /// Product line, empty when the export has no such column
    pub product_line: String,
    /// Gross transaction total
    pub total: f64,
    /// Gross income of the transaction
    pub profit: f64,
    /// Customer rating
    pub rating: f64,
}

impl SalesRecord {
    /// Calendar month this transaction falls in
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }
}

/// Which per-month aggregate to build from raw records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Sum of transaction totals
    TotalSales,
    /// Sum of transaction profits
    TotalProfit,
    /// Mean of customer ratings
    AverageRating,
}

/// Loader for raw sales exports
#[derive(Debug)]
pub struct SalesLoader;

impl SalesLoader {
    /// Load sales records from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load sales records from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let column = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            column(name).ok_or_else(|| {
                ForecastError::DataError(format!("Required column '{}' not found", name))
            })
        };

        let date_col = required("date")?;
        let total_col = required("total")?;
        let profit_col = required("profit")?;
        let rating_col = required("rating")?;
        let city_col = column("city");
        let branch_col = column("branch");
        let product_col = column("product_line");

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;

            // Unparseable dates or numerics drop the row
            let date = match row.get(date_col).and_then(parse_date) {
                Some(date) => date,
                None => continue,
            };
            let numeric = |col: usize| row.get(col).and_then(|v| v.trim().parse::<f64>().ok());
            let (total, profit, rating) =
                match (numeric(total_col), numeric(profit_col), numeric(rating_col)) {
                    (Some(t), Some(p), Some(r)) => (t, p, r),
                    _ => continue,
                };

            let text = |col: Option<usize>| {
                col.and_then(|c| row.get(c))
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default()
            };

            records.push(SalesRecord {
                date,
                city: text(city_col),
                branch: text(branch_col),
                product_line: text(product_col),
                total,
                profit,
                rating,
            });
        }

        Ok(records)
    }
}

/// Normalize a raw header the way the warehouse schema expects
pub fn normalize_header(raw: &str) -> String {
    let normalized = raw
        .trim()
        .replace(' ', "_")
        .to_lowercase()
        .replace('%', "p");

    if normalized == "gross_income" {
        "profit".to_string()
    } else {
        normalized
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Group records by calendar month and apply the metric
///
/// Produces a series sorted ascending by month; months with no records are
/// simply absent.
pub fn aggregate_monthly(records: &[SalesRecord], metric: Metric) -> Result<MonthlySeries> {
    let mut buckets: BTreeMap<Period, (f64, usize)> = BTreeMap::new();

    for record in records {
        let value = match metric {
            Metric::TotalSales => record.total,
            Metric::TotalProfit => record.profit,
            Metric::AverageRating => record.rating,
        };
        let bucket = buckets.entry(record.period()).or_insert((0.0, 0));
        bucket.0 += value;
        bucket.1 += 1;
    }

    let mut periods = Vec::with_capacity(buckets.len());
    let mut values = Vec::with_capacity(buckets.len());
    for (period, (sum, count)) in buckets {
        periods.push(period);
        values.push(match metric {
            Metric::AverageRating => sum / count as f64,
            _ => sum,
        });
    }

    MonthlySeries::new(periods, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_messy_headers() {
        assert_eq!(normalize_header(" Gross income "), "profit");
        assert_eq!(normalize_header("Tax 5%"), "tax_5p");
        assert_eq!(normalize_header("Product line"), "product_line");
        assert_eq!(normalize_header("Total"), "total");
    }

    #[test]
    fn parses_supported_date_formats() {
        assert_eq!(
            parse_date("1/25/2019"),
            NaiveDate::from_ymd_opt(2019, 1, 25)
        );
        assert_eq!(
            parse_date("2019-01-25"),
            NaiveDate::from_ymd_opt(2019, 1, 25)
        );
        assert_eq!(parse_date("not a date"), None);
    }
}

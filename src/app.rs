//! Explicit application state for the dashboard flow
//!
//! The dashboard runs in two stages: a setup stage that ingests the sales
//! export, and a dashboard stage that serves filters, KPIs, and the trend
//! forecast. The state is an explicit value passed between stages; there is
//! no process-wide session object.

use crate::data::{aggregate_monthly, Metric, SalesRecord};
use crate::error::{ForecastError, Result};
use crate::forecaster::{forecast, TrendForecast};
use crate::series::Period;
use serde::Serialize;

/// Application state, advanced by completing setup
#[derive(Debug, Clone)]
pub enum AppState {
    /// Waiting for a sales export to be loaded
    Setup,
    /// Records loaded; dashboard queries are available
    Dashboard(DashboardData),
}

impl AppState {
    /// Start in the setup stage
    pub fn new() -> Self {
        AppState::Setup
    }

    /// Complete setup with loaded records, moving to the dashboard stage
    pub fn complete_setup(self, records: Vec<SalesRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot open the dashboard with no sales records".to_string(),
            ));
        }
        Ok(AppState::Dashboard(DashboardData { records }))
    }

    /// Discard loaded data and return to the setup stage
    pub fn reset(self) -> Self {
        AppState::Setup
    }

    /// Dashboard data, if setup has completed
    pub fn dashboard(&self) -> Option<&DashboardData> {
        match self {
            AppState::Dashboard(data) => Some(data),
            AppState::Setup => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loaded records and the queries the dashboard stage runs over them
#[derive(Debug, Clone)]
pub struct DashboardData {
    records: Vec<SalesRecord>,
}

/// Headline figures for the KPI panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Sum of transaction totals
    pub total_sales: f64,
    /// Sum of transaction profits
    pub total_profit: f64,
    /// Mean customer rating
    pub average_rating: f64,
    /// Forecast sales for the month after the last observed one; None when
    /// the history is too short to forecast
    pub next_month_sales: Option<f64>,
}

impl DashboardData {
    /// The loaded records
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Records matching the selected months, cities, and branches
    ///
    /// An empty selection for a dimension means "all", matching the
    /// dashboard's multiselect defaults.
    pub fn filter(&self, months: &[Period], cities: &[&str], branches: &[&str]) -> Vec<SalesRecord> {
        self.records
            .iter()
            .filter(|r| months.is_empty() || months.contains(&r.period()))
            .filter(|r| cities.is_empty() || cities.contains(&r.city.as_str()))
            .filter(|r| branches.is_empty() || branches.contains(&r.branch.as_str()))
            .cloned()
            .collect()
    }

    /// Headline KPIs over the given records
    ///
    /// The next-month figure comes from the trend forecast on monthly sales
    /// totals; when the history is too short it is omitted rather than
    /// failing the whole panel.
    pub fn kpis(&self, records: &[SalesRecord], horizon: usize) -> Result<KpiSummary> {
        if records.is_empty() {
            return Err(ForecastError::DataError(
                "No records match the selected filters".to_string(),
            ));
        }

        let total_sales: f64 = records.iter().map(|r| r.total).sum();
        let total_profit: f64 = records.iter().map(|r| r.profit).sum();
        let average_rating =
            records.iter().map(|r| r.rating).sum::<f64>() / records.len() as f64;

        let next_month_sales = self
            .sales_trend(records, Metric::TotalSales, horizon)
            .ok()
            .and_then(|trend| trend.next_period().map(|p| p.value));

        Ok(KpiSummary {
            total_sales,
            total_profit,
            average_rating,
            next_month_sales,
        })
    }

    /// Monthly trend forecast of the chosen metric over the given records
    pub fn sales_trend(
        &self,
        records: &[SalesRecord],
        metric: Metric,
        horizon: usize,
    ) -> Result<TrendForecast> {
        let series = aggregate_monthly(records, metric)?;
        forecast(&series, horizon)
    }
}

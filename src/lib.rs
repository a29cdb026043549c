//! # Sales Trend
//!
//! A Rust library for monthly sales trend forecasting and dashboard
//! analytics.
//!
//! ## Features
//!
//! - Validated monthly series (period labels, strict chronological order)
//! - Adaptive trend model selection from data volume alone
//! - Ordinary least-squares linear and degree-2 polynomial fits
//! - Short-horizon extrapolation with calendar-correct future labels
//! - In-sample goodness-of-fit reporting (R-squared, MSE)
//! - Sales export ingestion and explicit setup/dashboard application state
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_trend::forecaster::forecast;
//! use sales_trend::series::MonthlySeries;
//!
//! let series = MonthlySeries::from_pairs(&[
//!     ("2023-09", 10.0),
//!     ("2023-10", 20.0),
//!     ("2023-11", 30.0),
//!     ("2023-12", 40.0),
//! ])?;
//!
//! let result = forecast(&series, 2)?;
//!
//! assert_eq!(result.model_name, "Linear Regression (Limited Data)");
//! assert_eq!(result.future.len(), 2);
//! assert_eq!(result.future[0].period.to_string(), "2024-01");
//! # Ok::<(), sales_trend::ForecastError>(())
//! ```
//!
//! ## Accuracy reporting
//!
//! R-squared and MSE are computed in-sample, on the same points the model
//! was fitted to. They describe how well the trend line matches history and
//! must not be read as out-of-sample forecast accuracy.

pub mod app;
pub mod data;
pub mod error;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod series;

// Re-export commonly used types
pub use crate::app::{AppState, DashboardData, KpiSummary};
pub use crate::data::{aggregate_monthly, Metric, SalesLoader, SalesRecord};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::{forecast, forecast_default, TrendForecast, DEFAULT_HORIZON};
pub use crate::metrics::FitMetrics;
pub use crate::models::{ModelKind, MIN_OBSERVATIONS, MODEL_SELECTION_THRESHOLD, POLYNOMIAL_DEGREE};
pub use crate::series::{MonthlySeries, Period};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

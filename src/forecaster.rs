//! Adaptive trend forecasting over monthly series
//!
//! The forecaster assigns each observation an integer time index, selects a
//! trend model from the series length alone, fits it by least squares, and
//! extrapolates a fixed number of future months. Reported R-squared and MSE
//! are in-sample (computed on the fitting data, no holdout); they describe
//! how well the curve matches history, not how accurate the forecast is.

use crate::error::{ForecastError, Result};
use crate::metrics::{fit_metrics, FitMetrics};
use crate::models::{
    FittedTrendModel, LinearTrend, ModelKind, PolynomialTrend, TrendModel, MIN_OBSERVATIONS,
};
use crate::series::{MonthlySeries, Period};
use serde::Serialize;

/// Default number of future months to forecast
pub const DEFAULT_HORIZON: usize = 6;

/// A historical observation annotated with its time index
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservedPoint {
    /// Calendar month of the observation
    pub period: Period,
    /// Observed value
    pub value: f64,
    /// Position within the series, 0-based; the sole regression feature
    pub time_index: usize,
}

/// A forecasted future month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Calendar month being forecast
    pub period: Period,
    /// Extrapolated value, carrying no uncertainty bounds
    pub value: f64,
}

/// Complete forecast bundle: history, fitted curve, extrapolation, metrics
///
/// Immutable and owned by the caller; the forecaster keeps no state between
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendForecast {
    /// Historical observations with their time indices
    pub history: Vec<ObservedPoint>,
    /// Human-readable label of the selected model
    pub model_name: String,
    /// In-sample predictions, aligned 1:1 with `history`
    pub fitted: Vec<f64>,
    /// Future months, exactly `horizon` entries
    pub future: Vec<ForecastPoint>,
    /// In-sample goodness of fit
    pub metrics: FitMetrics,
}

impl TrendForecast {
    /// The forecast for the month immediately after the last observation
    pub fn next_period(&self) -> Option<&ForecastPoint> {
        self.future.first()
    }
}

/// Forecast the trend of a monthly series over the default 6-month horizon
pub fn forecast_default(series: &MonthlySeries) -> Result<TrendForecast> {
    forecast(series, DEFAULT_HORIZON)
}

/// Forecast the trend of a monthly series `horizon` months ahead
///
/// The model is chosen from the series length alone: fewer than 5
/// observations get a straight line, 5 or more a degree-2 polynomial. The
/// fit is plain least squares with the time index as the only regressor.
/// Returns a complete bundle or a typed error, never a partial result.
pub fn forecast(series: &MonthlySeries, horizon: usize) -> Result<TrendForecast> {
    if horizon == 0 {
        return Err(ForecastError::InvalidInput(
            "Forecast horizon must be a positive number of periods".to_string(),
        ));
    }

    let n = series.len();
    if n < MIN_OBSERVATIONS {
        return Err(ForecastError::InsufficientData {
            got: n,
            need: MIN_OBSERVATIONS,
        });
    }

    let values = series.values();
    let (fitted_model, model_name): (Box<dyn FittedTrendModel>, String) =
        match ModelKind::select(n) {
            ModelKind::Linear => {
                let model = LinearTrend::new();
                let name = model.name().to_string();
                (Box::new(model.fit(values)?), name)
            }
            ModelKind::Polynomial => {
                let model = PolynomialTrend::new();
                let name = model.name().to_string();
                (Box::new(model.fit(values)?), name)
            }
        };

    let fitted = fitted_model.fitted_values(n);
    let metrics = fit_metrics(values, &fitted)?;

    let last_index = n - 1;
    let future_values = fitted_model.forecast(last_index, horizon);

    // last_period is Some: n >= MIN_OBSERVATIONS >= 1
    let last_period = series
        .last_period()
        .ok_or_else(|| ForecastError::InsufficientData { got: 0, need: MIN_OBSERVATIONS })?;

    let future = future_values
        .into_iter()
        .enumerate()
        .map(|(step, value)| ForecastPoint {
            period: last_period.advance(step + 1),
            value,
        })
        .collect();

    let history = series
        .iter()
        .enumerate()
        .map(|(time_index, (period, value))| ObservedPoint {
            period,
            value,
            time_index,
        })
        .collect();

    Ok(TrendForecast {
        history,
        model_name,
        fitted,
        future,
        metrics,
    })
}

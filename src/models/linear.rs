//! Ordinary least-squares straight-line trend

use crate::error::{ForecastError, Result};
use crate::models::{FittedTrendModel, TrendModel, MIN_OBSERVATIONS};

/// Straight-line trend model fitted by ordinary least squares
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Fitted straight-line trend
#[derive(Debug, Clone)]
pub struct FittedLinearTrend {
    /// Name of the model
    name: String,
    /// Intercept term
    intercept: f64,
    /// Slope per time step
    slope: f64,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Regression (Limited Data)".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendModel for LinearTrend {
    type Fitted = FittedLinearTrend;

    fn fit(&self, values: &[f64]) -> Result<Self::Fitted> {
        let n = values.len();
        if n < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                got: n,
                need: MIN_OBSERVATIONS,
            });
        }

        // Closed-form OLS over time indices 0..n-1
        let n_f = n as f64;
        let x_mean = (n_f - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n_f;

        let mut num = 0.0;
        let mut den = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            num += dx * (y - y_mean);
            den += dx * dx;
        }

        // den is strictly positive for n >= 2 distinct indices
        let slope = num / den;
        let intercept = y_mean - slope * x_mean;

        Ok(FittedLinearTrend {
            name: self.name.clone(),
            intercept,
            slope,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FittedLinearTrend {
    /// Intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Slope of the fitted line per time step
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl FittedTrendModel for FittedLinearTrend {
    fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn recovers_an_exact_line() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let fitted = LinearTrend::new().fit(&values).unwrap();

        assert!((fitted.slope() - 10.0).abs() < TOL);
        assert!((fitted.intercept() - 10.0).abs() < TOL);
        assert!((fitted.predict(4) - 50.0).abs() < TOL);
        assert!((fitted.predict(5) - 60.0).abs() < TOL);
    }

    #[test]
    fn fits_a_flat_line_to_constant_data() {
        let values = [7.5, 7.5, 7.5];
        let fitted = LinearTrend::new().fit(&values).unwrap();

        assert!(fitted.slope().abs() < TOL);
        assert!((fitted.predict(10) - 7.5).abs() < TOL);
    }

    #[test]
    fn needs_two_observations() {
        let model = LinearTrend::new();
        assert!(model.fit(&[]).is_err());
        assert!(model.fit(&[1.0]).is_err());
    }

    #[test]
    fn label_mentions_limited_data() {
        assert_eq!(LinearTrend::new().name(), "Linear Regression (Limited Data)");
    }
}

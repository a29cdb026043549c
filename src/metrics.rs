//! Goodness-of-fit metrics for fitted trends
//!
//! All metrics here are in-sample: the model is evaluated on the same data
//! it was fitted on. They measure fit quality, not out-of-sample accuracy.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Residuals below this are treated as exactly zero when deciding whether a
/// zero-variance fit is perfect
const ZERO_RESIDUAL_TOLERANCE: f64 = 1e-9;

/// In-sample goodness-of-fit metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitMetrics {
    /// Coefficient of determination, 1 - SS_res / SS_tot. Not clamped:
    /// least squares can produce negative values on pathological fits.
    pub r_squared: f64,
    /// Mean of squared residuals
    pub mse: f64,
    /// True when the history has zero variance; R-squared and MSE are not
    /// meaningful and callers should not present them as accuracy
    pub degenerate: bool,
}

/// Compute R-squared and MSE of fitted values against actuals
///
/// A zero-variance history (all actuals identical) makes SS_tot zero. When
/// the residuals are also zero the fit is exact and R-squared is defined as
/// 1.0 with the `degenerate` flag set; otherwise the fit cannot be
/// summarized and a `DegenerateFit` error is returned instead of a NaN.
pub fn fit_metrics(actual: &[f64], fitted: &[f64]) -> Result<FitMetrics> {
    if actual.len() != fitted.len() || actual.is_empty() {
        return Err(ForecastError::InvalidInput(
            "Actual and fitted values must have the same non-zero length".to_string(),
        ));
    }

    let n = actual.len() as f64;
    let mean = actual.iter().sum::<f64>() / n;

    let ss_res: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(a, f)| (a - f).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();

    let mse = ss_res / n;

    if ss_tot == 0.0 {
        if mse < ZERO_RESIDUAL_TOLERANCE {
            return Ok(FitMetrics {
                r_squared: 1.0,
                mse: 0.0,
                degenerate: true,
            });
        }
        return Err(ForecastError::DegenerateFit(
            "Zero-variance history with nonzero residuals".to_string(),
        ));
    }

    Ok(FitMetrics {
        r_squared: 1.0 - ss_res / ss_tot,
        mse,
        degenerate: false,
    })
}

impl std::fmt::Display for FitMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fit Metrics (in-sample):")?;
        writeln!(f, "  R-squared: {:.4}", self.r_squared)?;
        writeln!(f, "  MSE:       {:.4}", self.mse)?;
        if self.degenerate {
            writeln!(f, "  (degenerate: zero-variance history)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_scores_one() {
        let actual = [1.0, 2.0, 3.0];
        let metrics = fit_metrics(&actual, &actual).unwrap();
        assert_eq!(metrics.r_squared, 1.0);
        assert_eq!(metrics.mse, 0.0);
        assert!(!metrics.degenerate);
    }

    #[test]
    fn mean_prediction_scores_zero() {
        let actual = [1.0, 2.0, 3.0];
        let fitted = [2.0, 2.0, 2.0];
        let metrics = fit_metrics(&actual, &fitted).unwrap();
        assert!(metrics.r_squared.abs() < 1e-12);
    }

    #[test]
    fn constant_history_with_exact_fit_is_degenerate() {
        let actual = [5.0, 5.0, 5.0];
        let metrics = fit_metrics(&actual, &actual).unwrap();
        assert_eq!(metrics.r_squared, 1.0);
        assert_eq!(metrics.mse, 0.0);
        assert!(metrics.degenerate);
    }

    #[test]
    fn constant_history_with_residuals_is_an_error() {
        let actual = [5.0, 5.0, 5.0];
        let fitted = [4.0, 5.0, 6.0];
        assert!(fit_metrics(&actual, &fitted).is_err());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(fit_metrics(&[1.0], &[1.0, 2.0]).is_err());
        assert!(fit_metrics(&[], &[]).is_err());
    }
}

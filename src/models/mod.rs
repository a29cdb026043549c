//! Trend models for monthly series

use crate::error::Result;
use std::fmt::Debug;

pub mod linear;
pub mod polynomial;

pub use linear::LinearTrend;
pub use polynomial::PolynomialTrend;

/// Minimum observations needed to define a trend at all
pub const MIN_OBSERVATIONS: usize = 2;

/// Below this many observations a 2-parameter curve is unsafe to fit;
/// the selection policy falls back to a straight line
pub const MODEL_SELECTION_THRESHOLD: usize = 5;

/// Degree of the polynomial model used for longer series
pub const POLYNOMIAL_DEGREE: usize = 2;

/// Trend model that can be fitted to a sequence of values indexed 0..n-1
pub trait TrendModel: Debug {
    /// The type of fitted model produced
    type Fitted: FittedTrendModel;

    /// Fit the model on values observed at time indices 0..n-1
    fn fit(&self, values: &[f64]) -> Result<Self::Fitted>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Fitted trend model that can be evaluated at arbitrary time indices
pub trait FittedTrendModel: Debug {
    /// Evaluate the fitted curve at a single time index
    fn predict(&self, index: usize) -> f64;

    /// Evaluate the fitted curve at every historical index 0..n-1
    fn fitted_values(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.predict(i)).collect()
    }

    /// Extrapolate `horizon` steps beyond the last historical index
    fn forecast(&self, last_index: usize, horizon: usize) -> Vec<f64> {
        (1..=horizon).map(|i| self.predict(last_index + i)).collect()
    }

    /// Name of the model
    fn name(&self) -> &str;
}

/// Which trend model the selection policy picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Ordinary least-squares straight line
    Linear,
    /// Degree-2 polynomial least squares
    Polynomial,
}

impl ModelKind {
    /// Selection policy: a pure function of the series length
    pub fn select(n: usize) -> Self {
        if n < MODEL_SELECTION_THRESHOLD {
            ModelKind::Linear
        } else {
            ModelKind::Polynomial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, ModelKind::Linear)]
    #[case(3, ModelKind::Linear)]
    #[case(4, ModelKind::Linear)]
    #[case(5, ModelKind::Polynomial)]
    #[case(6, ModelKind::Polynomial)]
    #[case(60, ModelKind::Polynomial)]
    fn selection_is_a_pure_function_of_length(#[case] n: usize, #[case] expected: ModelKind) {
        assert_eq!(ModelKind::select(n), expected);
    }
}

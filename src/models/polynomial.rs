//! Degree-2 polynomial trend fitted by ordinary least squares

use crate::error::{ForecastError, Result};
use crate::models::{FittedTrendModel, TrendModel, POLYNOMIAL_DEGREE};

/// Polynomial trend model fitted via the normal equations
#[derive(Debug, Clone)]
pub struct PolynomialTrend {
    /// Name of the model
    name: String,
    /// Polynomial degree
    degree: usize,
}

/// Fitted polynomial trend
#[derive(Debug, Clone)]
pub struct FittedPolynomialTrend {
    /// Name of the model
    name: String,
    /// Coefficients in ascending order: c0 + c1*x + c2*x^2 + ...
    coefficients: Vec<f64>,
}

impl PolynomialTrend {
    /// Create a new polynomial trend model of the standard degree
    pub fn new() -> Self {
        Self::with_degree(POLYNOMIAL_DEGREE)
    }

    /// Create a polynomial trend model of the given degree
    pub fn with_degree(degree: usize) -> Self {
        Self {
            name: format!("Polynomial Regression (Degree {})", degree),
            degree,
        }
    }

    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.degree
    }
}

impl Default for PolynomialTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendModel for PolynomialTrend {
    type Fitted = FittedPolynomialTrend;

    fn fit(&self, values: &[f64]) -> Result<Self::Fitted> {
        let n = values.len();
        let need = self.degree + 1;
        if n < need {
            return Err(ForecastError::InsufficientData { got: n, need });
        }

        // Normal equations: (X^T X) c = X^T y, where row i of X is
        // [1, i, i^2, ..., i^degree]. The Gram matrix entries are power
        // sums of the time indices.
        let order = self.degree + 1;
        let mut power_sums = vec![0.0; 2 * self.degree + 1];
        let mut rhs = vec![0.0; order];

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            let mut x_pow = 1.0;
            for (k, sum) in power_sums.iter_mut().enumerate() {
                *sum += x_pow;
                if k < order {
                    rhs[k] += x_pow * y;
                }
                x_pow *= x;
            }
        }

        let mut gram = vec![vec![0.0; order]; order];
        for (r, row) in gram.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = power_sums[r + c];
            }
        }

        let coefficients = solve_linear_system(gram, rhs)?;

        Ok(FittedPolynomialTrend {
            name: self.name.clone(),
            coefficients,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FittedPolynomialTrend {
    /// Coefficients in ascending power order
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl FittedTrendModel for FittedPolynomialTrend {
    fn predict(&self, index: usize) -> f64 {
        let x = index as f64;
        // Horner evaluation
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Solve a small dense linear system with partial-pivot Gaussian elimination
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        // Pivot on the largest remaining entry in this column
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| {
                a[r1][col]
                    .abs()
                    .partial_cmp(&a[r2][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        if a[pivot_row][col].abs() < 1e-12 {
            return Err(ForecastError::MathError(
                "Singular normal equations: time indices are not distinct".to_string(),
            ));
        }

        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for col in (row + 1)..n {
            sum -= a[row][col] * x[col];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}

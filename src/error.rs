//! Error types for the sales_trend crate

use thiserror::Error;

/// Custom error types for the sales_trend crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few historical observations to define a trend
    #[error("Insufficient data: {got} period(s), need at least {need}")]
    InsufficientData { got: usize, need: usize },

    /// Malformed horizon, non-finite values, or unparseable period labels
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zero-variance history that cannot be summarized by R-squared
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),

    /// Error related to data loading or aggregation
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

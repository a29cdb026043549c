//! Monthly period labels and validated value series

use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calendar month, parsed from and displayed as a "YYYY-MM" label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period from a year and a 1-based month
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidInput(format!(
                "Month must be in 1..=12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-based)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next calendar month; December rolls over into January
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The period `steps` months after this one
    pub fn advance(&self, steps: usize) -> Self {
        let mut period = *self;
        for _ in 0..steps {
            period = period.next();
        }
        period
    }

    /// Build a period from a chrono date
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    fn from_str(label: &str) -> Result<Self> {
        let invalid = || {
            ForecastError::InvalidInput(format!(
                "Period label '{}' is not in YYYY-MM format",
                label
            ))
        };

        let (year_part, month_part) = label.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        Period::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A chronologically ordered series of (period, value) pairs
///
/// Construction validates that every value is finite, every label parses as
/// a calendar month, and periods are strictly increasing. Gaps between
/// months are tolerated; the forecaster regresses on positional indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    periods: Vec<Period>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Build a series from pre-parsed periods and values
    pub fn new(periods: Vec<Period>, values: Vec<f64>) -> Result<Self> {
        if periods.len() != values.len() {
            return Err(ForecastError::InvalidInput(format!(
                "Period count ({}) doesn't match value count ({})",
                periods.len(),
                values.len()
            )));
        }

        for value in &values {
            if !value.is_finite() {
                return Err(ForecastError::InvalidInput(
                    "Series values must be finite numbers".to_string(),
                ));
            }
        }

        for pair in periods.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::InvalidInput(format!(
                    "Periods must be strictly increasing: '{}' follows '{}'",
                    pair[1], pair[0]
                )));
            }
        }

        Ok(Self { periods, values })
    }

    /// Build a series from (label, value) pairs, parsing each label
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, f64)]) -> Result<Self> {
        let periods = pairs
            .iter()
            .map(|(label, _)| label.as_ref().parse())
            .collect::<Result<Vec<Period>>>()?;
        let values = pairs.iter().map(|(_, value)| *value).collect();

        Self::new(periods, values)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The periods in chronological order
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// The values, aligned with `periods`
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The most recent period, if any
    pub fn last_period(&self) -> Option<Period> {
        self.periods.last().copied()
    }

    /// Iterate over (period, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        self.periods
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

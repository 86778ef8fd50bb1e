//! Resolution and validation of the (month, year) query window.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::marketing_model::{validate_month, validate_year};
use crate::constants::{MAX_TARGET_YEAR, MIN_TARGET_YEAR, MONTH_NAMES};
use crate::errors::{Result, ValidationError};

/// A (month, year) pair bounding which assignment events count toward a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Self {
        Period { month, year }
    }

    /// Human readable label, e.g. "March 2025".
    pub fn label(&self) -> String {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|idx| MONTH_NAMES.get(idx as usize))
            .copied()
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOption {
    pub value: u32,
    pub label: String,
}

/// Month and year choices offered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodConfig {
    pub months: Vec<MonthOption>,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        PeriodConfig {
            months: month_options(),
            min_year: MIN_TARGET_YEAR,
            max_year: MAX_TARGET_YEAR,
        }
    }
}

impl PeriodConfig {
    /// Narrows the selectable years. The window must stay inside the range a
    /// target can be stored for.
    pub fn with_year_range(min_year: i32, max_year: i32) -> Result<Self> {
        if validate_year(min_year).is_err() {
            return Err(ValidationError::out_of_range(
                "minYear",
                i64::from(min_year),
                i64::from(MIN_TARGET_YEAR),
                i64::from(MAX_TARGET_YEAR),
            )
            .into());
        }
        if max_year < min_year || validate_year(max_year).is_err() {
            return Err(ValidationError::out_of_range(
                "maxYear",
                i64::from(max_year),
                i64::from(min_year),
                i64::from(MAX_TARGET_YEAR),
            )
            .into());
        }
        Ok(PeriodConfig {
            months: month_options(),
            min_year,
            max_year,
        })
    }

    pub fn year_options(&self) -> Vec<i32> {
        (self.min_year..=self.max_year).collect()
    }
}

fn month_options() -> Vec<MonthOption> {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, value)| MonthOption {
            value,
            label: (*name).to_string(),
        })
        .collect()
}

/// Resolves optional month/year selections into a validated [`Period`].
#[derive(Debug, Clone, Default)]
pub struct PeriodFilter {
    config: PeriodConfig,
}

impl PeriodFilter {
    pub fn new(config: PeriodConfig) -> Self {
        PeriodFilter { config }
    }

    /// Resolves the period, defaulting missing values to the current local month/year.
    pub fn resolve(&self, month: Option<u32>, year: Option<i32>) -> Result<Period> {
        self.resolve_at(month, year, Local::now().date_naive())
    }

    /// Same as [`PeriodFilter::resolve`] with an explicit "today".
    pub fn resolve_at(
        &self,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Result<Period> {
        let period = Period::new(
            month.unwrap_or_else(|| today.month()),
            year.unwrap_or_else(|| today.year()),
        );
        self.validate(period)?;
        Ok(period)
    }

    pub fn validate(&self, period: Period) -> Result<()> {
        validate_month(period.month)?;
        validate_year(period.year)?;
        if period.year < self.config.min_year || period.year > self.config.max_year {
            return Err(ValidationError::out_of_range(
                "year",
                i64::from(period.year),
                i64::from(self.config.min_year),
                i64::from(self.config.max_year),
            )
            .into());
        }
        Ok(())
    }
}

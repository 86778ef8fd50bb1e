//! Marketing target domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::period_filter::Period;
use crate::constants::{
    MAX_MONTH, MAX_TARGET_AMOUNT, MAX_TARGET_YEAR, MIN_MONTH, MIN_TARGET_AMOUNT, MIN_TARGET_YEAR,
};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a marketing employee who brings in trainees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingEmployee {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub total_applications: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee identity embedded in target listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
}

/// Monthly trainee quota for one employee.
///
/// `achieved_amount` is projected by the collaborator from trainee assignment
/// events inside the target's period. No input model carries it, so it can
/// never be written directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingTarget {
    pub id: i64,
    pub employee_id: i64,
    pub month: u32,
    pub year: i32,
    pub target_amount: i32,
    pub achieved_amount: i64,
    pub notes: Option<String>,
    pub set_by_id: Option<i64>,
    pub set_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummary>,
}

impl MarketingTarget {
    pub fn period(&self) -> Period {
        Period::new(self.month, self.year)
    }

    pub fn employee_name(&self) -> Option<&str> {
        self.employee.as_ref().map(|e| e.name.as_str())
    }
}

/// Input model for creating a new target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMarketingTarget {
    pub employee_id: Option<i64>,
    pub month: u32,
    pub year: i32,
    pub target_amount: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_by_id: Option<i64>,
}

impl NewMarketingTarget {
    /// Validates the new target. The first failing field is reported.
    pub fn validate(&self) -> Result<()> {
        match self.employee_id {
            None => {
                return Err(ValidationError::MissingField("employeeId".to_string()).into());
            }
            Some(employee_id) if employee_id <= 0 => {
                return Err(ValidationError::InvalidInput {
                    field: "employeeId".to_string(),
                    message: format!("must be a positive id, got {}", employee_id),
                }
                .into());
            }
            Some(_) => {}
        }
        validate_month(self.month)?;
        validate_year(self.year)?;
        validate_target_amount(self.target_amount)?;
        Ok(())
    }

    /// Period the new target applies to.
    pub fn period(&self) -> Period {
        Period::new(self.month, self.year)
    }
}

/// Update request as received from a caller.
///
/// Only `target_amount` and `notes` are mutable. The identity fields are
/// accepted here so that an attempt to change them can be rejected instead of
/// being silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketingTargetUpdate {
    pub target_amount: Option<i32>,
    pub notes: Option<String>,
    pub employee_id: Option<i64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Validated changes forwarded to the collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MarketingTargetUpdate {
    /// Checks the update and strips it down to the mutable fields.
    pub fn validate(&self) -> Result<TargetChanges> {
        if self.employee_id.is_some() {
            return Err(ValidationError::ImmutableField("employeeId".to_string()).into());
        }
        if self.month.is_some() {
            return Err(ValidationError::ImmutableField("month".to_string()).into());
        }
        if self.year.is_some() {
            return Err(ValidationError::ImmutableField("year".to_string()).into());
        }
        if self.target_amount.is_none() && self.notes.is_none() {
            return Err(ValidationError::InvalidInput {
                field: "targetAmount".to_string(),
                message: "update must change targetAmount or notes".to_string(),
            }
            .into());
        }
        if let Some(amount) = self.target_amount {
            validate_target_amount(amount)?;
        }
        Ok(TargetChanges {
            target_amount: self.target_amount,
            notes: self.notes.clone(),
        })
    }
}

/// Raw per-employee roll-up returned by the collaborator for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStatsRecord {
    pub employee_id: i64,
    pub name: String,
    pub monthly_target: i32,
    pub monthly_assigned: i64,
    pub total_assigned: i64,
    pub monthly_first_contact: i64,
}

/// Per-employee statistics with the achievement rate computed by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub employee_id: i64,
    pub name: String,
    pub monthly_target: i32,
    pub monthly_assigned: i64,
    pub total_assigned: i64,
    pub monthly_first_contact: i64,
    pub achievement_rate: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

/// The target with the highest achievement rate in a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub target_id: i64,
    pub employee_id: i64,
    pub employee_name: Option<String>,
    pub target_amount: i32,
    pub achieved_amount: i64,
    pub achievement_rate: i64,
}

/// Dashboard totals for a list of targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_targets: usize,
    pub total_target_amount: i64,
    pub total_achieved: i64,
    pub total_remaining: i64,
    pub average_achievement: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_performer: Option<TopPerformer>,
}

/// A target together with its computed progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    #[serde(flatten)]
    pub target: MarketingTarget,
    pub achievement_rate: i64,
    pub remaining: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetDashboard {
    pub period: Period,
    pub targets: Vec<TargetProgress>,
    pub stats: AggregateStats,
}

/// Ranked and unranked views over the same employee statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLeaderboard {
    pub period: Period,
    pub ranked: Vec<EmployeeStats>,
    pub all: Vec<EmployeeStats>,
}

pub(crate) fn validate_month(month: u32) -> std::result::Result<(), ValidationError> {
    if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
        return Err(ValidationError::out_of_range(
            "month",
            i64::from(month),
            i64::from(MIN_MONTH),
            i64::from(MAX_MONTH),
        ));
    }
    Ok(())
}

pub(crate) fn validate_year(year: i32) -> std::result::Result<(), ValidationError> {
    if !(MIN_TARGET_YEAR..=MAX_TARGET_YEAR).contains(&year) {
        return Err(ValidationError::out_of_range(
            "year",
            i64::from(year),
            i64::from(MIN_TARGET_YEAR),
            i64::from(MAX_TARGET_YEAR),
        ));
    }
    Ok(())
}

fn validate_target_amount(amount: i32) -> Result<()> {
    if !(MIN_TARGET_AMOUNT..=MAX_TARGET_AMOUNT).contains(&amount) {
        return Err(Error::Validation(ValidationError::out_of_range(
            "targetAmount",
            i64::from(amount),
            i64::from(MIN_TARGET_AMOUNT),
            i64::from(MAX_TARGET_AMOUNT),
        )));
    }
    Ok(())
}

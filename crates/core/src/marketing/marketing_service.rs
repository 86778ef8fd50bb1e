use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};

use super::achievement::{aggregate, target_progress};
use super::marketing_model::{
    EmployeeLeaderboard, MarketingEmployee, MarketingTarget, MarketingTargetUpdate,
    NewMarketingTarget, TargetDashboard,
};
use super::marketing_traits::{MarketingRepositoryTrait, MarketingTargetServiceTrait};
use super::period_filter::{Period, PeriodFilter};
use super::ranking::leaderboard;
use crate::constants::DEFAULT_READ_ATTEMPTS;
use crate::errors::{Result, ValidationError};

/// How often an idempotent read is issued before its failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRetryPolicy {
    /// Total attempts, first try included. Values below 1 behave as 1.
    pub max_attempts: u32,
}

impl Default for ReadRetryPolicy {
    fn default() -> Self {
        ReadRetryPolicy {
            max_attempts: DEFAULT_READ_ATTEMPTS,
        }
    }
}

impl ReadRetryPolicy {
    pub fn no_retry() -> Self {
        ReadRetryPolicy { max_attempts: 1 }
    }
}

/// Service combining the target store with the pure analytics.
pub struct MarketingTargetService {
    repository: Arc<dyn MarketingRepositoryTrait>,
    period_filter: PeriodFilter,
    retry_policy: ReadRetryPolicy,
}

impl MarketingTargetService {
    pub fn new(repository: Arc<dyn MarketingRepositoryTrait>, period_filter: PeriodFilter) -> Self {
        MarketingTargetService {
            repository,
            period_filter,
            retry_policy: ReadRetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: ReadRetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Runs a side-effect free collaborator read, re-issuing it on transient failures.
    async fn read_with_retry<T, F, Fut>(&self, operation: &str, mut read: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.retry_policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match read().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(
                        "{} failed (attempt {}/{}), retrying: {}",
                        operation, attempt, max_attempts, e
                    );
                    attempt += 1;
                }
                Err(e) => {
                    error!("{} failed: {}", operation, e);
                    return Err(e);
                }
            }
        }
    }

    async fn load_targets(&self, period: Period) -> Result<Vec<MarketingTarget>> {
        self.read_with_retry("list_targets", || self.repository.list_targets(period))
            .await
    }
}

#[async_trait]
impl MarketingTargetServiceTrait for MarketingTargetService {
    async fn get_targets(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<MarketingTarget>> {
        let period = self.period_filter.resolve(month, year)?;
        debug!("Loading marketing targets for {}", period);
        self.load_targets(period).await
    }

    async fn get_target_dashboard(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<TargetDashboard> {
        let period = self.period_filter.resolve(month, year)?;
        debug!("Building target dashboard for {}", period);

        let targets = self.load_targets(period).await?;
        let stats = aggregate(&targets);
        Ok(TargetDashboard {
            period,
            targets: target_progress(&targets),
            stats,
        })
    }

    async fn get_employee_leaderboard(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<EmployeeLeaderboard> {
        let period = self.period_filter.resolve(month, year)?;
        debug!("Building employee leaderboard for {}", period);

        let records = self
            .read_with_retry("list_employee_stats", || {
                self.repository.list_employee_stats(period)
            })
            .await?;
        Ok(leaderboard(period, records))
    }

    async fn get_employees(&self) -> Result<Vec<MarketingEmployee>> {
        self.read_with_retry("list_employees", || self.repository.list_employees())
            .await
    }

    async fn create_target(&self, new_target: NewMarketingTarget) -> Result<MarketingTarget> {
        new_target.validate()?;
        debug!(
            "Creating target of {} for employee {:?} in {}",
            new_target.target_amount,
            new_target.employee_id,
            new_target.period()
        );
        self.repository.create_target(new_target).await
    }

    async fn update_target(
        &self,
        target_id: i64,
        update: MarketingTargetUpdate,
    ) -> Result<MarketingTarget> {
        validate_target_id(target_id)?;
        let changes = update.validate().map_err(|e| {
            warn!("Rejected update for target {}: {}", target_id, e);
            e
        })?;
        self.repository.update_target(target_id, changes).await
    }

    async fn delete_target(&self, target_id: i64) -> Result<()> {
        validate_target_id(target_id)?;
        debug!("Deleting target {}", target_id);
        self.repository.delete_target(target_id).await
    }
}

fn validate_target_id(target_id: i64) -> Result<()> {
    if target_id <= 0 {
        return Err(ValidationError::InvalidInput {
            field: "targetId".to_string(),
            message: format!("must be a positive id, got {}", target_id),
        }
        .into());
    }
    Ok(())
}

use crate::errors::Result;
use crate::marketing::marketing_model::{
    EmployeeLeaderboard, EmployeeStatsRecord, MarketingEmployee, MarketingTarget,
    MarketingTargetUpdate, NewMarketingTarget, TargetChanges, TargetDashboard,
};
use crate::marketing::period_filter::Period;
use async_trait::async_trait;

/// Trait for the remote store that owns targets and derives achieved amounts.
///
/// Implementations must reject a second target for the same
/// (employee, month, year) with `Error::DuplicateTarget`.
#[async_trait]
pub trait MarketingRepositoryTrait: Send + Sync {
    async fn list_targets(&self, period: Period) -> Result<Vec<MarketingTarget>>;
    async fn create_target(&self, new_target: NewMarketingTarget) -> Result<MarketingTarget>;
    async fn update_target(&self, target_id: i64, changes: TargetChanges)
        -> Result<MarketingTarget>;
    async fn delete_target(&self, target_id: i64) -> Result<()>;
    async fn list_employees(&self) -> Result<Vec<MarketingEmployee>>;
    async fn list_employee_stats(&self, period: Period) -> Result<Vec<EmployeeStatsRecord>>;
}

/// Trait for marketing target service operations
#[async_trait]
pub trait MarketingTargetServiceTrait: Send + Sync {
    async fn get_targets(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<MarketingTarget>>;
    async fn get_target_dashboard(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<TargetDashboard>;
    async fn get_employee_leaderboard(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<EmployeeLeaderboard>;
    async fn get_employees(&self) -> Result<Vec<MarketingEmployee>>;
    async fn create_target(&self, new_target: NewMarketingTarget) -> Result<MarketingTarget>;
    async fn update_target(
        &self,
        target_id: i64,
        update: MarketingTargetUpdate,
    ) -> Result<MarketingTarget>;
    async fn delete_target(&self, target_id: i64) -> Result<()>;
}

//! Marketing targets module - domain models, analytics, services, and traits.

mod achievement;
mod marketing_model;
mod marketing_service;
mod marketing_traits;
mod period_filter;
mod ranking;


pub use achievement::{aggregate, compute_rate, target_progress};
pub use marketing_model::{
    AggregateStats, EmployeeLeaderboard, EmployeeStats, EmployeeStatsRecord, EmployeeSummary,
    MarketingEmployee, MarketingTarget, MarketingTargetUpdate, NewMarketingTarget, TargetChanges,
    TargetDashboard, TargetProgress, TopPerformer,
};
pub use marketing_service::{MarketingTargetService, ReadRetryPolicy};
pub use marketing_traits::{MarketingRepositoryTrait, MarketingTargetServiceTrait};
pub use period_filter::{MonthOption, Period, PeriodConfig, PeriodFilter};
pub use ranking::{build_employee_stats, leaderboard, rank, unranked};

//! Employee leaderboard ordering.

use super::achievement::compute_rate;
use super::marketing_model::{EmployeeLeaderboard, EmployeeStats, EmployeeStatsRecord};
use super::period_filter::Period;

/// Computes the achievement rate for each collaborator roll-up.
pub fn build_employee_stats(records: Vec<EmployeeStatsRecord>) -> Vec<EmployeeStats> {
    records
        .into_iter()
        .map(|record| EmployeeStats {
            achievement_rate: compute_rate(
                i64::from(record.monthly_target),
                record.monthly_assigned,
            ),
            employee_id: record.employee_id,
            name: record.name,
            monthly_target: record.monthly_target,
            monthly_assigned: record.monthly_assigned,
            total_assigned: record.total_assigned,
            monthly_first_contact: record.monthly_first_contact,
            rank: None,
        })
        .collect()
}

/// Orders employees by achievement rate, highest first, and numbers them from 1.
///
/// The sort is stable: employees with equal rates keep the order the
/// collaborator returned them in.
pub fn rank(employees: &[EmployeeStats]) -> Vec<EmployeeStats> {
    let mut ranked = employees.to_vec();
    ranked.sort_by(|a, b| b.achievement_rate.cmp(&a.achievement_rate));
    for (position, employee) in ranked.iter_mut().enumerate() {
        employee.rank = Some(position + 1);
    }
    ranked
}

/// All employees in collaborator order, without ranks.
pub fn unranked(employees: &[EmployeeStats]) -> Vec<EmployeeStats> {
    employees
        .iter()
        .cloned()
        .map(|mut employee| {
            employee.rank = None;
            employee
        })
        .collect()
}

pub fn leaderboard(period: Period, records: Vec<EmployeeStatsRecord>) -> EmployeeLeaderboard {
    let stats = build_employee_stats(records);
    EmployeeLeaderboard {
        period,
        ranked: rank(&stats),
        all: unranked(&stats),
    }
}

//! Achievement rate and dashboard aggregation over a period's targets.
//!
//! Everything here is pure: the inputs are targets already joined with their
//! achieved amounts, and the outputs are recomputed on every call.

use super::marketing_model::{AggregateStats, MarketingTarget, TargetProgress, TopPerformer};

/// Achievement rate in whole percent, rounded half up.
///
/// Returns 0 when `target` is not positive. Rates above 100 are kept as-is to
/// express over-achievement. A negative `achieved` counts as 0.
pub fn compute_rate(target: i64, achieved: i64) -> i64 {
    if target <= 0 {
        return 0;
    }
    let target = i128::from(target);
    let achieved = i128::from(achieved.max(0));
    let rate = (achieved * 200 + target) / (target * 2);
    i64::try_from(rate).unwrap_or(i64::MAX)
}

fn target_rate(target: &MarketingTarget) -> i64 {
    compute_rate(i64::from(target.target_amount), target.achieved_amount)
}

/// Reduces a period's targets into dashboard totals.
///
/// The top performer is the first target holding the highest rate. It is left
/// out when the highest rate is 0.
pub fn aggregate(targets: &[MarketingTarget]) -> AggregateStats {
    let mut total_target_amount: i64 = 0;
    let mut total_achieved: i64 = 0;
    let mut best: Option<(&MarketingTarget, i64)> = None;

    for target in targets {
        total_target_amount = total_target_amount.saturating_add(i64::from(target.target_amount));
        total_achieved = total_achieved.saturating_add(target.achieved_amount.max(0));

        let rate = target_rate(target);
        match best {
            Some((_, best_rate)) if rate <= best_rate => {}
            _ => best = Some((target, rate)),
        }
    }

    let top_performer = best
        .filter(|(_, rate)| *rate > 0)
        .map(|(target, rate)| TopPerformer {
            target_id: target.id,
            employee_id: target.employee_id,
            employee_name: target.employee_name().map(str::to_string),
            target_amount: target.target_amount,
            achieved_amount: target.achieved_amount,
            achievement_rate: rate,
        });

    AggregateStats {
        total_targets: targets.len(),
        total_target_amount,
        total_achieved,
        total_remaining: total_target_amount.saturating_sub(total_achieved).max(0),
        average_achievement: compute_rate(total_target_amount, total_achieved),
        top_performer,
    }
}

/// Attaches the rate and remaining quota to each target, keeping input order.
pub fn target_progress(targets: &[MarketingTarget]) -> Vec<TargetProgress> {
    targets
        .iter()
        .map(|target| TargetProgress {
            achievement_rate: target_rate(target),
            remaining: i64::from(target.target_amount)
                .saturating_sub(target.achieved_amount)
                .max(0),
            target: target.clone(),
        })
        .collect()
}

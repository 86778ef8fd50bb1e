//! Property-based tests for the marketing analytics.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use traincenter_core::marketing::{
    aggregate, build_employee_stats, compute_rate, rank, EmployeeStatsRecord, MarketingTarget,
    NewMarketingTarget,
};

// =============================================================================
// Generators
// =============================================================================

/// Generates a target inside the storable bounds with an arbitrary achieved count.
fn arb_target() -> impl Strategy<Value = MarketingTarget> {
    (1i64..10_000, 1i64..500, 1i32..=1000, 0i64..3000).prop_map(
        |(id, employee_id, target_amount, achieved_amount)| {
            let ts = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
            MarketingTarget {
                id,
                employee_id,
                month: 6,
                year: 2025,
                target_amount,
                achieved_amount,
                notes: None,
                set_by_id: None,
                set_at: ts,
                created_at: ts,
                updated_at: ts,
                employee: None,
            }
        },
    )
}

fn arb_targets(max_count: usize) -> impl Strategy<Value = Vec<MarketingTarget>> {
    proptest::collection::vec(arb_target(), 0..=max_count)
}

/// Small ranges so that tied rates are common.
fn arb_stats_records(max_count: usize) -> impl Strategy<Value = Vec<EmployeeStatsRecord>> {
    proptest::collection::vec((0i32..5, 0i64..5), 0..=max_count).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (monthly_target, monthly_assigned))| EmployeeStatsRecord {
                employee_id: idx as i64 + 1,
                name: format!("Employee {}", idx + 1),
                monthly_target,
                monthly_assigned,
                total_assigned: monthly_assigned,
                monthly_first_contact: 0,
            })
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The rate matches achieved/target*100 rounded half up.
    #[test]
    fn prop_rate_matches_rounded_percentage(target in 1i64..100_000, achieved in 0i64..1_000_000) {
        let expected = (achieved as f64 / target as f64 * 100.0 + 0.5).floor() as i64;
        let rate = compute_rate(target, achieved);
        // float rounding can only disagree on exact .5 boundaries lost to precision
        prop_assert!((rate - expected).abs() <= 1);
        prop_assert_eq!(rate, (achieved * 200 + target) / (target * 2));
    }

    /// For a fixed target, more achievement never lowers the rate.
    #[test]
    fn prop_rate_is_non_decreasing(target in 1i64..10_000, achieved in 0i64..100_000, extra in 0i64..1000) {
        prop_assert!(compute_rate(target, achieved) <= compute_rate(target, achieved + extra));
    }

    /// A zero target always yields a zero rate.
    #[test]
    fn prop_zero_target_rate_is_zero(achieved in 0i64..1_000_000) {
        prop_assert_eq!(compute_rate(0, achieved), 0);
    }

    /// The aggregate remainder is never negative.
    #[test]
    fn prop_total_remaining_is_non_negative(targets in arb_targets(30)) {
        let stats = aggregate(&targets);
        prop_assert!(stats.total_remaining >= 0);
        prop_assert_eq!(stats.total_targets, targets.len());
        prop_assert_eq!(
            stats.total_remaining,
            (stats.total_target_amount - stats.total_achieved).max(0)
        );
    }

    /// The top performer is omitted exactly when the best rate is 0, and is
    /// otherwise the first target holding the best rate.
    #[test]
    fn prop_top_performer_is_first_best_and_omitted_at_zero(targets in arb_targets(30)) {
        let stats = aggregate(&targets);
        let rates: Vec<i64> = targets
            .iter()
            .map(|t| compute_rate(i64::from(t.target_amount), t.achieved_amount))
            .collect();
        let max_rate = rates.iter().copied().max().unwrap_or(0);

        match stats.top_performer {
            None => prop_assert_eq!(max_rate, 0),
            Some(top) => {
                prop_assert!(max_rate > 0);
                prop_assert_eq!(top.achievement_rate, max_rate);
                let first_idx = rates.iter().position(|r| *r == max_rate).unwrap();
                prop_assert_eq!(top.target_id, targets[first_idx].id);
            }
        }
    }

    /// Ranking is ordered, numbered from 1, and stable on ties.
    #[test]
    fn prop_rank_is_stable_and_descending(records in arb_stats_records(25)) {
        let stats = build_employee_stats(records);
        let ranked = rank(&stats);

        prop_assert_eq!(ranked.len(), stats.len());
        for (idx, employee) in ranked.iter().enumerate() {
            prop_assert_eq!(employee.rank, Some(idx + 1));
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].achievement_rate >= pair[1].achievement_rate);
            if pair[0].achievement_rate == pair[1].achievement_rate {
                // employee ids follow input order
                prop_assert!(pair[0].employee_id < pair[1].employee_id);
            }
        }
    }

    /// Target amounts are accepted exactly inside [1, 1000].
    #[test]
    fn prop_create_accepts_only_bounded_amounts(amount in -50i32..1100) {
        let new_target = NewMarketingTarget {
            employee_id: Some(5),
            month: 3,
            year: 2025,
            target_amount: amount,
            notes: None,
            set_by_id: None,
        };
        prop_assert_eq!(new_target.validate().is_ok(), (1..=1000).contains(&amount));
    }
}

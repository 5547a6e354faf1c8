//! Greedy selector and the [`GrowthPlanner`] implementation.
//!
//! The selector compares every stat's projected target against its current
//! value and picks the largest deficit. Ordering is total:
//! `(deficit, base value, reversed name)`, so the fully tied case still has
//! exactly one winner.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use soulkeeper_core::error::PlanError;
use soulkeeper_core::traits::GrowthPlanner;
use soulkeeper_core::types::{Recommendation, StatMap};

use crate::projection::continuous_targets;
use crate::rate::compute_common_r;

/// The production planner: one exponential rate shared by every stat.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialPlanner;

impl ExponentialPlanner {
    /// Create a new ExponentialPlanner.
    pub fn new() -> Self {
        Self
    }
}

impl GrowthPlanner for ExponentialPlanner {
    fn common_rate(&self, base_values: &[f64], horizon: i64) -> f64 {
        compute_common_r(base_values, horizon)
    }

    fn targets(&self, base: &StatMap, rate: f64, elapsed: f64) -> StatMap {
        continuous_targets(base, rate, elapsed)
    }

    fn next_stat(
        &self,
        base: &StatMap,
        current: &StatMap,
        horizon: i64,
        elapsed: i64,
    ) -> Result<Recommendation, PlanError> {
        greedy_next_stat_to_increment(base, current, horizon, elapsed)
    }
}

/// Pick the stat that is furthest behind its smooth growth target.
///
/// Horizon and elapsed are not validated here; a non-positive horizon simply
/// calibrates to `r = 0`. `current` must hold a value for every stat in
/// `base`, otherwise the stat sheets have diverged and
/// [`PlanError::InvalidState`] is returned. Nothing is mutated; applying the
/// recommendation is up to the caller.
pub fn greedy_next_stat_to_increment(
    base: &StatMap,
    current: &StatMap,
    horizon: i64,
    elapsed: i64,
) -> Result<Recommendation, PlanError> {
    if base.is_empty() {
        return Err(PlanError::EmptyStatSet);
    }

    let values: Vec<f64> = base.values().copied().collect();
    let rate = compute_common_r(&values, horizon);
    let targets = continuous_targets(base, rate, elapsed as f64);

    let mut deficits = StatMap::new();
    for (stat, target) in &targets {
        let have = current
            .get(stat)
            .ok_or_else(|| PlanError::InvalidState(format!("missing current value for {stat}")))?;
        deficits.insert(stat.clone(), target - have);
    }

    let stat = deficits
        .iter()
        .max_by_key(|&(stat, deficit)| {
            (
                OrderedFloat(*deficit),
                OrderedFloat(base[stat]),
                Reverse(stat.as_str()),
            )
        })
        .map(|(stat, _)| stat.clone())
        .ok_or(PlanError::EmptyStatSet)?;

    tracing::debug!(%stat, rate, horizon, elapsed, "greedy stat selected");

    Ok(Recommendation {
        stat,
        deficits,
        rate,
    })
}

/// Validated planning entry point.
///
/// Rejects `horizon <= 0`, `elapsed <= 0` and non-positive base values with
/// [`PlanError::InvalidArgument`], and stat sheets whose key sets differ with
/// [`PlanError::InvalidState`].
pub fn plan_next_stat(
    base: &StatMap,
    current: &StatMap,
    horizon: i64,
    elapsed: i64,
) -> Result<Recommendation, PlanError> {
    ExponentialPlanner::new().plan(base, current, horizon, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(pairs: &[(&str, f64)]) -> StatMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn warrior() -> StatMap {
        map(&[
            ("Vitality", 11.0),
            ("Attunement", 8.0),
            ("Endurance", 12.0),
            ("Strength", 13.0),
            ("Dexterity", 13.0),
            ("Resistance", 11.0),
            ("Intelligence", 9.0),
            ("Faith", 9.0),
        ])
    }

    // --- greedy_next_stat_to_increment ---

    #[test]
    fn vitality_strength_scenario() {
        let base = map(&[("Vitality", 11.0), ("Strength", 13.0)]);
        let rec = greedy_next_stat_to_increment(&base, &base, 2, 1).unwrap();

        let growth = (26.0f64 / 24.0).sqrt();
        assert!((rec.rate - (26.0f64 / 24.0).ln() / 2.0).abs() < 1e-15);
        assert!((rec.deficits["Vitality"] - 11.0 * (growth - 1.0)).abs() < 1e-12);
        assert!((rec.deficits["Strength"] - 13.0 * (growth - 1.0)).abs() < 1e-12);
        assert!((rec.deficits["Vitality"] - 0.449).abs() < 1e-3);
        assert!((rec.deficits["Strength"] - 0.531).abs() < 1e-3);
        assert_eq!(rec.stat, "Strength");
    }

    #[test]
    fn single_stat_one_point() {
        // S0 = 5, L = 1: r = ln(1.2), target at t = 1 is exactly 6.
        let base = map(&[("X", 5.0)]);
        let rec = greedy_next_stat_to_increment(&base, &base, 1, 1).unwrap();
        assert!((rec.rate - 1.2f64.ln()).abs() < 1e-12);
        assert!((rec.deficits["X"] - 1.0).abs() < 1e-9);
        assert_eq!(rec.stat, "X");
    }

    #[test]
    fn single_stat_doubling() {
        // L = S0 doubles the stat: r * L = ln 2, target at t = L is 10.
        let base = map(&[("X", 5.0)]);
        let rec = greedy_next_stat_to_increment(&base, &base, 5, 5).unwrap();
        assert!((rec.rate * 5.0 - std::f64::consts::LN_2).abs() < 1e-12);
        assert!((rec.deficits["X"] - 5.0).abs() < 1e-9);
        assert_eq!(rec.stat, "X");
    }

    #[test]
    fn full_tie_picks_smallest_name() {
        let base = map(&[("B", 10.0), ("A", 10.0)]);
        let current = map(&[("A", 0.0), ("B", 0.0)]);
        for (l, t) in [(1, 1), (5, 3), (100, 100), (0, 0), (-3, 7)] {
            let rec = greedy_next_stat_to_increment(&base, &current, l, t).unwrap();
            assert_eq!(rec.stat, "A", "L={l} t={t}");
        }
    }

    #[test]
    fn equal_deficit_prefers_larger_base() {
        // r = 0 (horizon 0): deficit = base - current.
        let base = map(&[("A", 5.0), ("B", 8.0)]);
        let current = map(&[("A", 4.0), ("B", 7.0)]);
        let rec = greedy_next_stat_to_increment(&base, &current, 0, 1).unwrap();
        assert_eq!(rec.deficits["A"], rec.deficits["B"]);
        assert_eq!(rec.stat, "B");
    }

    #[test]
    fn larger_deficit_beats_larger_base() {
        let base = map(&[("A", 5.0), ("B", 8.0)]);
        let current = map(&[("A", 3.0), ("B", 8.0)]);
        let rec = greedy_next_stat_to_increment(&base, &current, 10, 1).unwrap();
        assert_eq!(rec.stat, "A");
    }

    #[test]
    fn negative_deficits_allowed() {
        let base = map(&[("A", 5.0), ("B", 5.0)]);
        let current = map(&[("A", 20.0), ("B", 9.0)]);
        let rec = greedy_next_stat_to_increment(&base, &current, 10, 1).unwrap();
        assert!(rec.deficits["A"] < 0.0);
        assert!(rec.deficits["B"] < 0.0);
        assert_eq!(rec.stat, "B");
    }

    #[test]
    fn missing_current_is_invalid_state() {
        let base = map(&[("A", 5.0), ("B", 5.0)]);
        let current = map(&[("A", 5.0)]);
        let err = greedy_next_stat_to_increment(&base, &current, 10, 1).unwrap_err();
        assert_eq!(err, PlanError::InvalidState("missing current value for B".into()));
    }

    #[test]
    fn extra_current_keys_ignored_by_selector() {
        let base = map(&[("A", 5.0)]);
        let current = map(&[("A", 5.0), ("Z", 99.0)]);
        let rec = greedy_next_stat_to_increment(&base, &current, 10, 1).unwrap();
        assert_eq!(rec.stat, "A");
        assert_eq!(rec.deficits.len(), 1);
    }

    #[test]
    fn empty_base_is_error() {
        let err = greedy_next_stat_to_increment(&StatMap::new(), &StatMap::new(), 10, 1)
            .unwrap_err();
        assert_eq!(err, PlanError::EmptyStatSet);
    }

    #[test]
    fn inputs_not_mutated() {
        let base = warrior();
        let current = warrior();
        let _ = greedy_next_stat_to_increment(&base, &current, 40, 3).unwrap();
        assert_eq!(base, warrior());
        assert_eq!(current, warrior());
    }

    #[test]
    fn warrior_first_pick_breaks_tie_by_name() {
        // Strength and Dexterity tie on deficit and base; name breaks the tie.
        let rec = greedy_next_stat_to_increment(&warrior(), &warrior(), 40, 1).unwrap();
        assert_eq!(rec.stat, "Dexterity");
    }

    #[test]
    fn greedy_walk_spends_points_proportionally() {
        let base = warrior();
        let mut current = warrior();
        let horizon = 86;
        for t in 1..=horizon {
            let rec = greedy_next_stat_to_increment(&base, &current, horizon, t).unwrap();
            *current.get_mut(&rec.stat).unwrap() += 1.0;
        }
        // L = S0 doubles every stat; the greedy walk tracks that within one point.
        for (stat, value) in &base {
            assert!(
                (current[stat] - 2.0 * value).abs() <= 1.0,
                "{stat}: {} vs {}",
                current[stat],
                2.0 * value
            );
        }
        let spent: f64 = current.values().sum::<f64>() - base.values().sum::<f64>();
        assert_eq!(spent, horizon as f64);
    }

    // --- plan_next_stat ---

    #[test]
    fn plan_rejects_zero_horizon() {
        let err = plan_next_stat(&warrior(), &warrior(), 0, 1).unwrap_err();
        assert!(matches!(err, PlanError::InvalidArgument(_)));
    }

    #[test]
    fn plan_rejects_zero_elapsed() {
        let err = plan_next_stat(&warrior(), &warrior(), 10, 0).unwrap_err();
        assert!(matches!(err, PlanError::InvalidArgument(_)));
    }

    #[test]
    fn plan_rejects_diverging_keys() {
        let mut current = warrior();
        current.insert("Luck".into(), 7.0);
        let err = plan_next_stat(&warrior(), &current, 10, 1).unwrap_err();
        assert!(matches!(err, PlanError::InvalidState(_)));

        let mut current = warrior();
        current.remove("Faith");
        let err = plan_next_stat(&warrior(), &current, 10, 1).unwrap_err();
        assert!(matches!(err, PlanError::InvalidState(_)));
    }

    #[test]
    fn plan_allows_elapsed_past_horizon() {
        let rec = plan_next_stat(&warrior(), &warrior(), 10, 25).unwrap();
        assert!(rec.chosen_deficit() > 0.0);
    }

    #[test]
    fn plan_matches_selector_for_valid_input() {
        let base = warrior();
        let mut current = warrior();
        current.insert("Strength".into(), 16.0);
        let a = plan_next_stat(&base, &current, 30, 4).unwrap();
        let b = greedy_next_stat_to_increment(&base, &current, 30, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn planner_trait_object() {
        let planner: Box<dyn GrowthPlanner> = Box::new(ExponentialPlanner::new());
        let rec = planner.plan(&warrior(), &warrior(), 40, 1).unwrap();
        assert_eq!(rec.stat, "Dexterity");
        assert_eq!(planner.common_rate(&[1.0], 1), compute_common_r(&[1.0], 1));
    }

    // --- proptest ---

    fn stat_maps() -> impl Strategy<Value = (StatMap, StatMap)> {
        prop::collection::vec((1u32..50, 0u32..30), 1..9).prop_map(|pairs| {
            let mut base = StatMap::new();
            let mut current = StatMap::new();
            for (i, (b, extra)) in pairs.into_iter().enumerate() {
                let name = format!("S{i}");
                base.insert(name.clone(), f64::from(b));
                current.insert(name, f64::from(b + extra));
            }
            (base, current)
        })
    }

    proptest! {
        #[test]
        fn idempotent(
            (base, current) in stat_maps(),
            horizon in 1i64..200,
            elapsed in 1i64..200,
        ) {
            let a = greedy_next_stat_to_increment(&base, &current, horizon, elapsed).unwrap();
            let b = greedy_next_stat_to_increment(&base, &current, horizon, elapsed).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn chosen_has_maximal_deficit(
            (base, current) in stat_maps(),
            horizon in 1i64..200,
            elapsed in 1i64..200,
        ) {
            let rec = greedy_next_stat_to_increment(&base, &current, horizon, elapsed).unwrap();
            let best = rec.chosen_deficit();
            for d in rec.deficits.values() {
                prop_assert!(*d <= best);
            }
            prop_assert!(base.contains_key(&rec.stat));
        }

        #[test]
        fn deficits_cover_base_keys(
            (base, current) in stat_maps(),
            horizon in 1i64..200,
            elapsed in 1i64..200,
        ) {
            let rec = greedy_next_stat_to_increment(&base, &current, horizon, elapsed).unwrap();
            prop_assert!(rec.deficits.keys().eq(base.keys()));
        }

        #[test]
        fn uniform_tie_always_first_name(
            n in 1usize..9,
            value in 1u32..50,
            horizon in 1i64..200,
            elapsed in 1i64..200,
        ) {
            let base: StatMap = (0..n).map(|i| (format!("S{i}"), f64::from(value))).collect();
            let rec = greedy_next_stat_to_increment(&base, &base, horizon, elapsed).unwrap();
            prop_assert_eq!(rec.stat, "S0");
        }
    }
}

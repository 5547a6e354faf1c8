//! Trait interfaces between Soulkeeper crates.
//!
//! - [`GrowthPlanner`] — stat-allocation planner (soulkeeper-planner implements)

use crate::error::PlanError;
use crate::types::{Recommendation, StatMap};

/// Pure computation of growth rates, projected targets and the next stat.
///
/// Every stat is modelled as `base * e^(r * t)` with a single rate `r`
/// shared by all stats, calibrated so the summed curve reaches
/// `sum(base) + L` at `t = L`. Implementations hold no mutable state, so a
/// planner may be shared freely between callers.
pub trait GrowthPlanner: Send + Sync {
    /// Common growth rate for the given starting values and horizon `L`.
    ///
    /// Total over its inputs: returns `0.0` when `L <= 0` or the values sum
    /// to zero or less.
    fn common_rate(&self, base_values: &[f64], horizon: i64) -> f64;

    /// Continuous target of every stat at elapsed time `t`.
    fn targets(&self, base: &StatMap, rate: f64, elapsed: f64) -> StatMap;

    /// Greedy choice of the stat furthest behind its target.
    ///
    /// Does not validate `horizon` or `elapsed`. `current` must contain
    /// every key of `base`.
    fn next_stat(
        &self,
        base: &StatMap,
        current: &StatMap,
        horizon: i64,
        elapsed: i64,
    ) -> Result<Recommendation, PlanError>;

    /// Public planning entry point.
    ///
    /// Rejects non-positive `horizon` or `elapsed`, non-positive base values
    /// and diverging key sets, then delegates to [`next_stat`](Self::next_stat).
    fn plan(
        &self,
        base: &StatMap,
        current: &StatMap,
        horizon: i64,
        elapsed: i64,
    ) -> Result<Recommendation, PlanError> {
        if horizon <= 0 {
            return Err(PlanError::InvalidArgument(format!(
                "horizon must be positive, got {horizon}"
            )));
        }
        if elapsed <= 0 {
            return Err(PlanError::InvalidArgument(format!(
                "elapsed must be positive, got {elapsed}"
            )));
        }
        if let Some((stat, value)) = base.iter().find(|(_, v)| !(v.is_finite() && **v > 0.0)) {
            return Err(PlanError::InvalidArgument(format!(
                "base value of {stat} must be positive, got {value}"
            )));
        }
        if let Some(extra) = current.keys().find(|k| !base.contains_key(*k)) {
            return Err(PlanError::InvalidState(format!(
                "current stats contain {extra}, which has no base value"
            )));
        }
        self.next_stat(base, current, horizon, elapsed)
    }
}

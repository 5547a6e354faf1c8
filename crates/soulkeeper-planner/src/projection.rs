//! Continuous target projection.

use soulkeeper_core::types::StatMap;

/// Project every stat along its exponential curve: `target = base * e^(r * t)`.
///
/// Preserves the key set of `base`. At `t = 0` or `r = 0` the result equals
/// `base`.
pub fn continuous_targets(base: &StatMap, rate: f64, elapsed: f64) -> StatMap {
    let growth = (rate * elapsed).exp();
    base.iter()
        .map(|(stat, value)| (stat.clone(), value * growth))
        .collect()
}

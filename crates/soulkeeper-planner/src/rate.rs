//! Common growth-rate calibration.
//!
//! Given starting values with sum `S0` and a horizon of `L` points, the rate
//! `r = ln(1 + L / S0) / L` is the one for which `S0 * e^(r * L) = S0 + L`:
//! exactly `L` points are spent by the time `t` reaches `L`.

/// Compute the growth rate shared by all stats.
///
/// The function is total. A non-positive horizon or a non-positive sum of
/// starting values yields `0.0` (no growth). Negative individual values are
/// not a supported input.
pub fn compute_common_r(base_values: &[f64], horizon: i64) -> f64 {
    if horizon <= 0 {
        return 0.0;
    }

    let s0: f64 = base_values.iter().sum();
    if s0 <= 0.0 {
        return 0.0;
    }

    let l = horizon as f64;
    // ln_1p keeps precision when L is small relative to S0.
    (l / s0).ln_1p() / l
}

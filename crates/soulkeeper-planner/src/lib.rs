//! # soulkeeper-planner — Greedy stat-allocation planner.
//!
//! Every stat is modelled as an independent exponential curve
//! `base * e^(r * t)` sharing one growth rate `r`:
//! - **Rate calibration**: `r = ln(1 + L / S0) / L`, the unique rate for which
//!   the summed curves grow from `S0` to `S0 + L` by `t = L`.
//! - **Projection**: the continuous target of each stat at elapsed time `t`.
//! - **Greedy selection**: the stat with the largest shortfall against its
//!   target gets the next point; ties go to the larger base value, then to
//!   the lexicographically smallest name.
//!
//! All functions are pure and hold no state.

pub mod engine;
pub mod projection;
pub mod rate;

pub use engine::{ExponentialPlanner, greedy_next_stat_to_increment, plan_next_stat};
pub use projection::continuous_targets;
pub use rate::compute_common_r;

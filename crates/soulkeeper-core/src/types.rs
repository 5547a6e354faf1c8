//! Core data types: stat identifiers, stat maps and planner output.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownStatError;

/// Mapping from stat name to a numeric value.
///
/// Used both for starting values and for current allocations when talking to
/// the planner. Ordered so iteration and display are deterministic.
pub type StatMap = BTreeMap<String, f64>;

/// A character attribute that can receive level-up points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Vitality,
    Attunement,
    Endurance,
    Strength,
    Dexterity,
    Resistance,
    Intelligence,
    Faith,
}

impl Stat {
    /// All stats in in-game menu order.
    pub const ALL: [Stat; 8] = [
        Stat::Vitality,
        Stat::Attunement,
        Stat::Endurance,
        Stat::Strength,
        Stat::Dexterity,
        Stat::Resistance,
        Stat::Intelligence,
        Stat::Faith,
    ];

    /// Canonical name, used as the key in stat maps and save files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vitality => "Vitality",
            Self::Attunement => "Attunement",
            Self::Endurance => "Endurance",
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Resistance => "Resistance",
            Self::Intelligence => "Intelligence",
            Self::Faith => "Faith",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = UnknownStatError;

    /// Case-insensitive lookup by canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownStatError(needle.to_string()))
    }
}

/// Result of a greedy planning query.
///
/// Carries the chosen stat together with the full deficit map and the
/// calibrated growth rate so callers can display or audit the decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Stat that should receive the next point.
    pub stat: String,
    /// Projected target minus current value, per stat. May be negative.
    pub deficits: StatMap,
    /// Common exponential growth rate `r` used for the projection.
    pub rate: f64,
}

impl Recommendation {
    /// Deficit of the chosen stat.
    pub fn chosen_deficit(&self) -> f64 {
        self.deficits.get(&self.stat).copied().unwrap_or(0.0)
    }

    /// Deficits sorted largest first; equal deficits fall back to name order.
    pub fn ranked_deficits(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .deficits
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }
}

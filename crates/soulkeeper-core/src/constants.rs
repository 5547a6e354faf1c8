//! Application constants and the starting-class table.

use serde::{Deserialize, Serialize};

use crate::types::{Stat, StatMap};

/// File name of the save document, kept compatible with the original tracker.
pub const DEFAULT_STATE_FILE: &str = "ds_game_state_gui.json";

/// Directory created under the platform data dir.
pub const APP_DIR: &str = "soulkeeper";

/// Environment variable that overrides the save document location.
pub const STATE_ENV_VAR: &str = "SOULKEEPER_STATE";

/// Decimal places used when displaying the growth rate and deficits.
pub const RATE_DISPLAY_PRECISION: usize = 6;

/// Starting class of a character build.
///
/// Only the Warrior is supported in this version; the base stat table is
/// fixed at character creation and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use soulkeeper_core::constants::StartingClass;
/// use soulkeeper_core::types::Stat;
///
/// let class = StartingClass::default();
/// assert_eq!(class, StartingClass::Warrior);
/// assert_eq!(class.base_value(Stat::Strength), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StartingClass {
    #[default]
    Warrior,
}

impl StartingClass {
    /// Display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
        }
    }

    /// Starting value of a single stat for this class.
    pub fn base_value(&self, stat: Stat) -> u32 {
        match self {
            Self::Warrior => match stat {
                Stat::Vitality => 11,
                Stat::Attunement => 8,
                Stat::Endurance => 12,
                Stat::Strength => 13,
                Stat::Dexterity => 13,
                Stat::Resistance => 11,
                Stat::Intelligence => 9,
                Stat::Faith => 9,
            },
        }
    }

    /// Starting values for every stat, in [`Stat::ALL`] order.
    pub fn base_stats(&self) -> Vec<(Stat, u32)> {
        Stat::ALL.iter().map(|&s| (s, self.base_value(s))).collect()
    }

    /// Starting values as a planner-ready [`StatMap`].
    pub fn base_stat_map(&self) -> StatMap {
        self.base_stats()
            .into_iter()
            .map(|(s, v)| (s.name().to_string(), f64::from(v)))
            .collect()
    }
}

impl std::fmt::Display for StartingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

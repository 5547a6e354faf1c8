//! The game state document and its persistence.
//!
//! The JSON layout matches save files written by the original tracker, so
//! existing saves load unchanged. Stat sheets are validated on load: base and
//! current must share one key set of known stats, and every base value must
//! be strictly positive.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use soulkeeper_core::constants::StartingClass;
use soulkeeper_core::types::{Stat, StatMap};

use crate::error::LedgerError;

/// Integer stat values keyed by stat name, as stored in the save file.
pub type StatSheet = BTreeMap<String, u32>;

/// The whole persisted save document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub starting_class: StartingClass,
    /// Starting values; fixed once the class is chosen.
    pub base_stats: StatSheet,
    /// Allocated values; starts equal to `base_stats`.
    pub current_stats: StatSheet,
    /// Souls drops recorded per area.
    pub souls_by_area: BTreeMap<String, Vec<u64>>,
    /// Souls spent on each level-up, in order.
    pub souls_used_for_leveling: Vec<u64>,
    /// Merchant purchase flags per area.
    pub merchant_checklist: BTreeMap<String, BTreeMap<String, bool>>,
    /// Free-form progress note.
    pub game_status: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(StartingClass::default())
    }
}

impl GameState {
    /// A new game for `class`: both stat sheets at the class's base values.
    pub fn fresh(class: StartingClass) -> Self {
        let sheet: StatSheet = class
            .base_stats()
            .into_iter()
            .map(|(stat, v)| (stat.name().to_string(), v))
            .collect();
        Self {
            starting_class: class,
            base_stats: sheet.clone(),
            current_stats: sheet,
            souls_by_area: BTreeMap::new(),
            souls_used_for_leveling: Vec::new(),
            merchant_checklist: BTreeMap::new(),
            game_status: String::new(),
        }
    }

    /// Check the stat sheet invariants.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.base_stats.is_empty() {
            return Err(LedgerError::InvalidState("base stats are empty".into()));
        }
        for (name, value) in &self.base_stats {
            if !Stat::ALL.iter().any(|s| s.name() == name) {
                return Err(LedgerError::InvalidState(format!("unknown stat in base stats: {name}")));
            }
            if *value == 0 {
                return Err(LedgerError::InvalidState(format!("base value of {name} must be positive")));
            }
        }
        if !self.base_stats.keys().eq(self.current_stats.keys()) {
            return Err(LedgerError::InvalidState(
                "base and current stats have different stat sets".into(),
            ));
        }
        Ok(())
    }

    /// Load a save file, or start a fresh game if the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no save file, starting fresh");
            return Ok(Self::default());
        }

        let data = std::fs::read(path).map_err(|e| LedgerError::Io(e.to_string()))?;
        let state: GameState = serde_json::from_slice(&data)
            .map_err(|e| LedgerError::CorruptedFile(format!("invalid document: {e}")))?;

        state.validate().map_err(|e| match e {
            LedgerError::InvalidState(msg) => LedgerError::CorruptedFile(msg),
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            areas = state.souls_by_area.len(),
            level_ups = state.souls_used_for_leveling.len(),
            "save file loaded"
        );
        Ok(state)
    }

    /// Write the document as pretty JSON.
    ///
    /// Writes to a sibling temporary file first and renames it into place,
    /// so an interrupted save never truncates the previous one.
    pub fn save_to_file(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| LedgerError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);

        std::fs::write(&tmp, json.as_bytes()).map_err(|e| LedgerError::Io(e.to_string()))?;
        std::fs::rename(&tmp, path).map_err(|e| LedgerError::Io(e.to_string()))?;

        tracing::debug!(path = %path.display(), "save file written");
        Ok(())
    }

    // --- stat sheets ---

    /// Planner snapshots of `(base, current)`.
    pub fn stat_maps(&self) -> (StatMap, StatMap) {
        (to_stat_map(&self.base_stats), to_stat_map(&self.current_stats))
    }

    /// Points allocated since the start: current total minus base total.
    pub fn points_spent(&self) -> i64 {
        let base: i64 = self.base_stats.values().map(|&v| i64::from(v)).sum();
        let current: i64 = self.current_stats.values().map(|&v| i64::from(v)).sum();
        current - base
    }

    /// Add one point to `stat` (matched case-insensitively); returns the
    /// new value.
    pub fn apply_allocation(&mut self, stat: &str) -> Result<u32, LedgerError> {
        let stat: Stat = stat.parse()?;
        let value = self
            .current_stats
            .get_mut(stat.name())
            .ok_or_else(|| LedgerError::UnknownStat(stat.name().to_string()))?;
        *value = value
            .checked_add(1)
            .ok_or_else(|| LedgerError::InvalidState(format!("{stat} overflow")))?;
        Ok(*value)
    }

    /// Put every current stat back to its base value.
    ///
    /// Level-up costs are left untouched.
    pub fn reset_stats(&mut self) {
        self.current_stats = self.base_stats.clone();
    }

    /// Store a trimmed progress note.
    pub fn set_game_status(&mut self, status: &str) {
        self.game_status = status.trim().to_string();
    }
}

fn to_stat_map(sheet: &StatSheet) -> StatMap {
    sheet.iter().map(|(k, v)| (k.clone(), f64::from(*v))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_warrior_has_matching_sheets() {
        let s = GameState::fresh(StartingClass::Warrior);
        assert_eq!(s.base_stats, s.current_stats);
        assert_eq!(s.base_stats["Strength"], 13);
        assert_eq!(s.base_stats.len(), 8);
        assert!(s.souls_by_area.is_empty());
        assert!(s.game_status.is_empty());
        s.validate().unwrap();
    }

    #[test]
    fn default_is_fresh_warrior() {
        assert_eq!(GameState::default(), GameState::fresh(StartingClass::Warrior));
    }

    #[test]
    fn apply_allocation_increments() {
        let mut s = GameState::default();
        assert_eq!(s.apply_allocation("Faith").unwrap(), 10);
        assert_eq!(s.current_stats["Faith"], 10);
        assert_eq!(s.base_stats["Faith"], 9);
        assert_eq!(s.points_spent(), 1);
    }

    #[test]
    fn apply_allocation_unknown_stat() {
        let mut s = GameState::default();
        let err = s.apply_allocation("Luck").unwrap_err();
        assert_eq!(err, LedgerError::UnknownStat("Luck".into()));
    }

    #[test]
    fn reset_restores_base_keeps_costs() {
        let mut s = GameState::default();
        s.apply_allocation("Vitality").unwrap();
        s.souls_used_for_leveling.push(673);
        s.reset_stats();
        assert_eq!(s.current_stats, s.base_stats);
        assert_eq!(s.souls_used_for_leveling, vec![673]);
    }

    #[test]
    fn stat_maps_are_snapshots() {
        let mut s = GameState::default();
        let (base, current) = s.stat_maps();
        s.apply_allocation("Strength").unwrap();
        assert_eq!(base["Strength"], 13.0);
        assert_eq!(current["Strength"], 13.0);
        assert_eq!(s.current_stats["Strength"], 14);
    }

    #[test]
    fn apply_allocation_accepts_any_case() {
        let mut s = GameState::default();
        assert_eq!(s.apply_allocation(" strength ").unwrap(), 14);
        assert_eq!(s.current_stats["Strength"], 14);
        assert!(!s.current_stats.contains_key(" strength "));
    }

    #[test]
    fn apply_allocation_known_stat_missing_from_sheet() {
        let mut s = GameState::default();
        s.base_stats.remove("Faith");
        s.current_stats.remove("Faith");
        let err = s.apply_allocation("faith").unwrap_err();
        assert_eq!(err, LedgerError::UnknownStat("Faith".into()));
    }

    #[test]
    fn set_game_status_trims() {
        let mut s = GameState::default();
        s.set_game_status("  rang both bells \n");
        assert_eq!(s.game_status, "rang both bells");
    }

    #[test]
    fn validate_rejects_diverging_keys() {
        let mut s = GameState::default();
        s.current_stats.remove("Faith");
        assert!(matches!(s.validate(), Err(LedgerError::InvalidState(_))));
    }

    #[test]
    fn validate_rejects_zero_base() {
        let mut s = GameState::default();
        s.base_stats.insert("Faith".into(), 0);
        assert!(matches!(s.validate(), Err(LedgerError::InvalidState(_))));
    }

    #[test]
    fn validate_rejects_unknown_stat() {
        let mut s = GameState::default();
        s.base_stats.insert("Luck".into(), 7);
        s.current_stats.insert("Luck".into(), 7);
        assert!(matches!(s.validate(), Err(LedgerError::InvalidState(_))));
    }

    // --- persistence ---

    #[test]
    fn missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let s = GameState::load_from_file(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, GameState::default());
    }

    #[test]
    fn save_and_load_preserves_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("save.json");

        let mut s = GameState::default();
        s.apply_allocation("Endurance").unwrap();
        s.souls_by_area.insert("Undead Burg".into(), vec![200, 1000]);
        s.souls_used_for_leveling.push(673);
        s.merchant_checklist
            .entry("Undead Burg".into())
            .or_default()
            .insert("Undead Merchant".into(), true);
        s.set_game_status("killed Taurus Demon");
        s.save_to_file(&path).unwrap();

        let loaded = GameState::load_from_file(&path).unwrap();
        assert_eq!(loaded, s);
        assert!(!dir.path().join("nested").join("save.json.tmp").exists());
    }

    #[test]
    fn saved_layout_is_pretty_json_with_original_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        GameState::default().save_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"starting_class\": \"Warrior\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        for key in [
            "starting_class",
            "base_stats",
            "current_stats",
            "souls_by_area",
            "souls_used_for_leveling",
            "merchant_checklist",
            "game_status",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn loads_document_from_original_tool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ds_game_state_gui.json");
        let original = r#"{
  "starting_class": "Warrior",
  "base_stats": {
    "Vitality": 11, "Attunement": 8, "Endurance": 12, "Strength": 13,
    "Dexterity": 13, "Resistance": 11, "Intelligence": 9, "Faith": 9
  },
  "current_stats": {
    "Vitality": 12, "Attunement": 8, "Endurance": 12, "Strength": 14,
    "Dexterity": 13, "Resistance": 11, "Intelligence": 9, "Faith": 9
  },
  "souls_by_area": {"Undead Asylum": [50, 120]},
  "souls_used_for_leveling": [673, 690],
  "merchant_checklist": {"Undead Asylum": {}, "Undead Burg": {"Undead Merchant": false}},
  "game_status": "Asylum cleared"
}"#;
        std::fs::write(&path, original).unwrap();

        let s = GameState::load_from_file(&path).unwrap();
        assert_eq!(s.current_stats["Strength"], 14);
        assert_eq!(s.points_spent(), 2);
        assert_eq!(s.souls_by_area["Undead Asylum"], vec![50, 120]);
        assert!(!s.merchant_checklist["Undead Burg"]["Undead Merchant"]);
        assert_eq!(s.game_status, "Asylum cleared");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, r#"{"game_status": "just started"}"#).unwrap();

        let s = GameState::load_from_file(&path).unwrap();
        assert_eq!(s.game_status, "just started");
        assert_eq!(s.base_stats, GameState::default().base_stats);
        assert!(s.souls_used_for_leveling.is_empty());
    }

    #[test]
    fn invalid_json_is_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(matches!(
            GameState::load_from_file(&path),
            Err(LedgerError::CorruptedFile(_))
        ));
    }

    #[test]
    fn diverging_sheets_on_disk_are_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(
            &path,
            r#"{"base_stats": {"Vitality": 11}, "current_stats": {"Strength": 13}}"#,
        )
        .unwrap();
        assert!(matches!(
            GameState::load_from_file(&path),
            Err(LedgerError::CorruptedFile(_))
        ));
    }
}

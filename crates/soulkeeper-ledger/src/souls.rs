//! Souls accounting: drops per area and souls spent on level-ups.

use crate::error::LedgerError;
use crate::names::normalize_area;
use crate::state::GameState;

impl GameState {
    /// Total souls picked up across every area.
    pub fn total_accumulated_souls(&self) -> u64 {
        self.souls_by_area
            .values()
            .fold(0u64, |acc, drops| acc.saturating_add(saturating_sum(drops)))
    }

    /// Total souls spent on level-ups.
    pub fn total_souls_used(&self) -> u64 {
        saturating_sum(&self.souls_used_for_leveling)
    }

    /// Per-area `(name, drop count, souls total)` in display order.
    pub fn area_totals(&self) -> impl Iterator<Item = (&str, usize, u64)> {
        self.souls_by_area
            .iter()
            .map(|(area, drops)| (area.as_str(), drops.len(), saturating_sum(drops)))
    }

    /// Accumulated minus used. Negative when level-ups were recorded for
    /// souls that were never logged as drops.
    pub fn remaining_souls(&self) -> i128 {
        i128::from(self.total_accumulated_souls()) - i128::from(self.total_souls_used())
    }

    /// Tracked areas in display (sorted) order.
    pub fn area_names(&self) -> Vec<&str> {
        self.souls_by_area.keys().map(String::as_str).collect()
    }

    /// Resolve user input to a tracked area key, trying the exact spelling
    /// first and the normalised one second.
    pub(crate) fn resolve_area(&self, input: &str) -> Result<String, LedgerError> {
        if self.souls_by_area.contains_key(input) {
            return Ok(input.to_string());
        }
        let area = normalize_area(input)?;
        if self.souls_by_area.contains_key(&area) {
            Ok(area)
        } else {
            Err(LedgerError::AreaNotFound(area))
        }
    }

    /// Start tracking an area. Also opens an empty merchant section for it.
    pub fn add_area(&mut self, name: &str) -> Result<String, LedgerError> {
        let area = normalize_area(name)?;
        if self.souls_by_area.contains_key(&area) {
            return Err(LedgerError::AreaExists(area));
        }
        self.souls_by_area.insert(area.clone(), Vec::new());
        self.merchant_checklist.entry(area.clone()).or_default();
        Ok(area)
    }

    /// Stop tracking an area, dropping its souls and its merchants.
    pub fn delete_area(&mut self, name: &str) -> Result<String, LedgerError> {
        let area = self.resolve_area(name)?;
        self.souls_by_area.remove(&area);
        self.merchant_checklist.remove(&area);
        Ok(area)
    }

    /// Drops recorded for an area, in entry order.
    pub fn drops(&self, area: &str) -> Result<&[u64], LedgerError> {
        let area = self.resolve_area(area)?;
        Ok(self
            .souls_by_area
            .get(&area)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Record a souls drop in an existing area.
    pub fn add_drop(&mut self, area: &str, souls: u64) -> Result<(), LedgerError> {
        if souls == 0 {
            return Err(LedgerError::InvalidAmount("souls drop must be at least 1".into()));
        }
        let area = self.resolve_area(area)?;
        self.souls_by_area.entry(area).or_default().push(souls);
        Ok(())
    }

    /// Remove the drop at `index` (0-based) from an area; returns its value.
    pub fn delete_drop(&mut self, area: &str, index: usize) -> Result<u64, LedgerError> {
        let area = self.resolve_area(area)?;
        let drops = self.souls_by_area.entry(area).or_default();
        if index >= drops.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: drops.len(),
            });
        }
        Ok(drops.remove(index))
    }

    /// Record the souls cost of one level-up.
    pub fn add_level_up(&mut self, souls: u64) -> Result<(), LedgerError> {
        if souls == 0 {
            return Err(LedgerError::InvalidAmount("level-up cost must be at least 1".into()));
        }
        self.souls_used_for_leveling.push(souls);
        Ok(())
    }

    /// Remove the level-up cost at `index` (0-based); returns its value.
    pub fn delete_level_up(&mut self, index: usize) -> Result<u64, LedgerError> {
        let len = self.souls_used_for_leveling.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(self.souls_used_for_leveling.remove(index))
    }
}

/// Sum that clamps at `u64::MAX`; hand-edited saves may hold huge drops.
fn saturating_sum(values: &[u64]) -> u64 {
    values.iter().fold(0u64, |acc, &v| acc.saturating_add(v))
}

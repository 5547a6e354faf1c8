//! Tracker: the single owner of mutable game state.
//!
//! The [`Tracker`] ties together the save document, its location on disk and
//! a [`GrowthPlanner`]. Callers read through [`Tracker::state`] and mutate
//! only through the named operations below; the planner only ever sees
//! immutable snapshots of the stat sheets.

use std::fmt;
use std::path::{Path, PathBuf};

use soulkeeper_core::traits::GrowthPlanner;
use soulkeeper_core::types::Recommendation;
use soulkeeper_planner::ExponentialPlanner;

use crate::config::TrackerConfig;
use crate::error::LedgerError;
use crate::state::GameState;

/// Save document plus planner, bound to one file.
pub struct Tracker {
    state: GameState,
    path: PathBuf,
    planner: Box<dyn GrowthPlanner>,
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("path", &self.path)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Tracker {
    /// Open the save file named by `config`, or start fresh if it is missing.
    pub fn open(config: &TrackerConfig) -> Result<Self, LedgerError> {
        Self::open_path(&config.state_path)
    }

    /// Open a specific save file, or start fresh if it is missing.
    pub fn open_path(path: &Path) -> Result<Self, LedgerError> {
        let state = GameState::load_from_file(path)?;
        Ok(Self::with_state(state, path.to_path_buf()))
    }

    /// Wrap an existing state without touching the disk.
    pub fn with_state(state: GameState, path: PathBuf) -> Self {
        Self {
            state,
            path,
            planner: Box::new(ExponentialPlanner::new()),
        }
    }

    /// Replace the planner (used to inject alternative growth models).
    pub fn with_planner(mut self, planner: Box<dyn GrowthPlanner>) -> Self {
        self.planner = planner;
        self
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Save file this tracker is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the state to the bound file.
    pub fn save(&self) -> Result<(), LedgerError> {
        self.state.save_to_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "state saved");
        Ok(())
    }

    /// Discard in-memory changes and re-read the bound file.
    pub fn reload(&mut self) -> Result<(), LedgerError> {
        self.state = GameState::load_from_file(&self.path)?;
        tracing::info!(path = %self.path.display(), "state reloaded");
        Ok(())
    }

    // --- planning ---

    /// Recommend the next stat for a build of `horizon` points, `elapsed`
    /// of which are already spent. Mutates nothing.
    pub fn recommend(&self, horizon: i64, elapsed: i64) -> Result<Recommendation, LedgerError> {
        let (base, current) = self.state.stat_maps();
        let rec = self.planner.plan(&base, &current, horizon, elapsed)?;
        tracing::debug!(stat = %rec.stat, rate = rec.rate, horizon, elapsed, "recommendation");
        Ok(rec)
    }

    /// Compute a recommendation and apply it: +1 to the chosen stat, and the
    /// level-up cost recorded when `souls_cost` is given.
    ///
    /// Nothing is changed if planning fails or the cost is zero.
    pub fn apply_recommendation(
        &mut self,
        horizon: i64,
        elapsed: i64,
        souls_cost: Option<u64>,
    ) -> Result<Recommendation, LedgerError> {
        if souls_cost == Some(0) {
            return Err(LedgerError::InvalidAmount("level-up cost must be at least 1".into()));
        }
        let rec = self.recommend(horizon, elapsed)?;
        self.apply_allocation(&rec.stat)?;
        if let Some(cost) = souls_cost {
            self.add_level_up(cost)?;
        }
        Ok(rec)
    }

    // --- stat sheets ---

    /// Add one point to `stat`; returns the new value.
    pub fn apply_allocation(&mut self, stat: &str) -> Result<u32, LedgerError> {
        let value = self.state.apply_allocation(stat)?;
        tracing::info!(stat, value, "allocation applied");
        Ok(value)
    }

    /// Reset current stats to the starting class values.
    pub fn reset_stats(&mut self) {
        self.state.reset_stats();
        tracing::info!("current stats reset to base");
    }

    /// Update the free-form progress note.
    pub fn set_game_status(&mut self, status: &str) {
        self.state.set_game_status(status);
        tracing::debug!(status = %self.state.game_status, "game status updated");
    }

    // --- souls ---

    /// Start tracking an area; returns its normalised name.
    pub fn add_area(&mut self, name: &str) -> Result<String, LedgerError> {
        let area = self.state.add_area(name)?;
        tracing::info!(%area, "area added");
        Ok(area)
    }

    /// Stop tracking an area and its merchants.
    pub fn delete_area(&mut self, name: &str) -> Result<String, LedgerError> {
        let area = self.state.delete_area(name)?;
        tracing::info!(%area, "area deleted");
        Ok(area)
    }

    /// Record a souls drop.
    pub fn add_drop(&mut self, area: &str, souls: u64) -> Result<(), LedgerError> {
        self.state.add_drop(area, souls)?;
        tracing::debug!(area, souls, "drop added");
        Ok(())
    }

    /// Remove a souls drop by index.
    pub fn delete_drop(&mut self, area: &str, index: usize) -> Result<u64, LedgerError> {
        let souls = self.state.delete_drop(area, index)?;
        tracing::debug!(area, index, souls, "drop deleted");
        Ok(souls)
    }

    /// Record a level-up cost.
    pub fn add_level_up(&mut self, souls: u64) -> Result<(), LedgerError> {
        self.state.add_level_up(souls)?;
        tracing::debug!(souls, "level-up cost added");
        Ok(())
    }

    /// Remove a level-up cost by index.
    pub fn delete_level_up(&mut self, index: usize) -> Result<u64, LedgerError> {
        let souls = self.state.delete_level_up(index)?;
        tracing::debug!(index, souls, "level-up cost deleted");
        Ok(souls)
    }

    // --- merchants ---

    /// Add a merchant to the checklist.
    pub fn add_merchant(&mut self, area: &str, name: &str) -> Result<(String, String), LedgerError> {
        let (area, name) = self.state.add_merchant(area, name)?;
        tracing::info!(%area, %name, "merchant added");
        Ok((area, name))
    }

    /// Flip a merchant's bought flag; returns the new value.
    pub fn toggle_merchant(&mut self, area: &str, name: &str) -> Result<bool, LedgerError> {
        let bought = self.state.toggle_merchant(area, name)?;
        tracing::debug!(area, name, bought, "merchant toggled");
        Ok(bought)
    }
}

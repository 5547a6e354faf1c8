//! Tracker configuration.
//!
//! Provides [`TrackerConfig`] with defaults for the save file location and
//! log level. The save path can be overridden by a command-line flag or the
//! `SOULKEEPER_STATE` environment variable.

use std::path::PathBuf;

use soulkeeper_core::constants::{APP_DIR, DEFAULT_STATE_FILE, STATE_ENV_VAR};

/// Configuration for a tracker session.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Location of the JSON save document.
    pub state_path: PathBuf,
    /// Log level filter string (e.g. "warn", "debug", "soulkeeper_ledger=trace").
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let state_path = dirs::data_dir()
            .map(|d| d.join(APP_DIR).join(DEFAULT_STATE_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

        Self {
            state_path,
            log_level: "warn".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Resolve the save path: explicit flag, then environment, then default.
    pub fn resolve(path_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(path_flag, std::env::var(STATE_ENV_VAR).ok())
    }

    fn resolve_with(path_flag: Option<PathBuf>, env_path: Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(p) = path_flag {
            cfg.state_path = p;
        } else if let Some(p) = env_path.filter(|p| !p.trim().is_empty()) {
            cfg.state_path = PathBuf::from(p);
        }
        cfg
    }

    /// Builder-style log level override.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

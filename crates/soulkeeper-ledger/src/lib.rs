//! # soulkeeper-ledger — Save document and bookkeeping.
//!
//! Owns everything the planner treats as an external collaborator: the JSON
//! save document, souls accounting, the merchant checklist and the stat
//! sheets. All mutation funnels through [`Tracker`], which holds the single
//! authoritative [`GameState`] and hands immutable snapshots to the planner.
//!
//! # Modules
//!
//! - [`error`] — `LedgerError` enum
//! - [`names`] — area name normalisation
//! - [`state`] — `GameState` document, persistence and stat sheets
//! - [`souls`] — areas, drops and level-up costs
//! - [`merchants`] — merchant purchase checklist
//! - [`config`] — `TrackerConfig` (save path, log level)
//! - [`tracker`] — `Tracker`, the single owner of mutable state

pub mod config;
pub mod error;
pub mod merchants;
pub mod names;
pub mod souls;
pub mod state;
pub mod tracker;

// Re-exports for convenient access
pub use config::TrackerConfig;
pub use error::LedgerError;
pub use names::title_case;
pub use state::{GameState, StatSheet};
pub use tracker::Tracker;

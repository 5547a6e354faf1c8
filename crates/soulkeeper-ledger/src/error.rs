//! Ledger error types.

use soulkeeper_core::error::{PlanError, UnknownStatError};
use thiserror::Error;

/// Errors that can occur while editing or persisting the game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An area with this name is already tracked.
    #[error("area already exists: {0}")]
    AreaExists(String),

    /// No area with this name is tracked.
    #[error("area not found: {0}")]
    AreaNotFound(String),

    /// The merchant is already listed under the area.
    #[error("merchant {name} already exists in {area}")]
    MerchantExists {
        /// Normalised area name.
        area: String,
        /// Merchant name.
        name: String,
    },

    /// The area or the merchant is not in the checklist.
    #[error("merchant {name} not found in {area}")]
    MerchantNotFound {
        /// Normalised area name.
        area: String,
        /// Merchant name.
        name: String,
    },

    /// A list index past the end of the list.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current list length.
        len: usize,
    },

    /// A souls amount that is not allowed (zero).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Stat name that is not part of the character's stat sheet.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A name that is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Save file is unreadable or violates the stat sheet invariants.
    #[error("corrupted file: {0}")]
    CorruptedFile(String),

    /// Serialization error.
    #[error("serialization: {0}")]
    Serialization(String),

    /// In-memory state violates an invariant.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Planning error from the planner.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<UnknownStatError> for LedgerError {
    fn from(e: UnknownStatError) -> Self {
        LedgerError::UnknownStat(e.0)
    }
}

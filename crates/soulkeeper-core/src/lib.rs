//! # soulkeeper-core
//! Foundation types and traits shared by the planner, the ledger and the CLI.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

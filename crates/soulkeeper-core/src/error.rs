//! Error types shared across Soulkeeper crates.
use thiserror::Error;

/// A stat name that is not one of the known attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown stat: {0}")]
pub struct UnknownStatError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("invalid argument: {0}")] InvalidArgument(String),
    #[error("invalid state: {0}")] InvalidState(String),
    #[error("no stats to plan over")] EmptyStatSet,
}

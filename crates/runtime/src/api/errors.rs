//! Error types surfaced by the runtime API.
//!
//! Decisions themselves never fail; these cover wiring mistakes a host makes
//! while assembling a team.
use capture_core::{AgentIndex, Team};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("unknown role '{name}' (known roles: {known})")]
    UnknownRole { name: String, known: String },

    #[error("agent index {0} was assigned twice")]
    DuplicateAgent(AgentIndex),

    #[error("agent {index} plays for {actual}, not {expected}")]
    TeamMismatch {
        index: AgentIndex,
        expected: Team,
        actual: Team,
    },

    #[error("agent {0} asked for an action before initialize")]
    NotInitialized(AgentIndex),
}

//! Common error infrastructure for capture-core.
//!
//! Domain errors live next to the code that raises them ([`MoveError`] with
//! movement, [`LayoutError`] with the layout parser). This module provides the
//! shared classification so hosts can decide how to react.
//!
//! [`MoveError`]: crate::action::MoveError
//! [`LayoutError`]: crate::state::LayoutError

use crate::action::MoveError;
use crate::state::LayoutError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller can retry with another action.
    Recoverable,

    /// Invalid input; should not be retried without changes.
    Validation,

    /// The host violated a collaborator precondition.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common behaviour for all capture-core errors.
pub trait GameError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable machine-readable code for logs.
    fn error_code(&self) -> &'static str;
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Illegal { .. } => ErrorSeverity::Recoverable,
            MoveError::AgentNotFound(_) | MoveError::PositionUnknown(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::AgentNotFound(_) => "MOVE_AGENT_NOT_FOUND",
            MoveError::PositionUnknown(_) => "MOVE_POSITION_UNKNOWN",
            MoveError::Illegal { .. } => "MOVE_ILLEGAL",
        }
    }
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::Empty => "LAYOUT_EMPTY",
            LayoutError::RaggedRow { .. } => "LAYOUT_RAGGED_ROW",
            LayoutError::UnknownTile { .. } => "LAYOUT_UNKNOWN_TILE",
            LayoutError::DuplicateAgent(_) => "LAYOUT_DUPLICATE_AGENT",
            LayoutError::MissingAgent(_) => "LAYOUT_MISSING_AGENT",
            LayoutError::TooFewAgents(_) => "LAYOUT_TOO_FEW_AGENTS",
        }
    }
}

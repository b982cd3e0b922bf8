//! Deterministic game types and rules for the two-team capture game.
//!
//! `capture-core` defines the canonical grid model (positions, headings,
//! layouts, agent state) and the read-only [`StateView`] contract consumed by
//! the decision engine. [`CaptureState`] is the in-memory implementation used
//! by the match runner and by tests; [`MazeDistancer`] is the precomputed
//! distance oracle.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Heading, LegalActions, MoveError};
pub use config::{AgentConfig, CarryRule};
pub use env::{DistanceOracle, MazeDistancer};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AgentIndex, AgentState, CaptureState, Layout, LayoutError, Position, StateView, Team,
};

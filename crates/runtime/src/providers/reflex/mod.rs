//! Reflex agents: score every legal action, play the best one.
//!
//! Each turn goes through three steps:
//!
//! 1. **Features**: the agent's [`Role`] turns (state, action) into a sparse
//!    [`FeatureVector`] by looking one move ahead.
//! 2. **Scoring**: the vector is dotted with the role's [`WeightTable`].
//! 3. **Selection**: the highest-scoring actions are collected, ties broken at
//!    random, unless the [`RetreatPlanner`] decides it is time to go home.

mod agent;
mod context;
mod dead_end;
mod features;
mod retreat;
mod roles;

pub use agent::ReflexAgent;
pub use context::AgentContext;
pub use dead_end::is_trap;
pub use features::{Feature, FeatureVector, WeightTable};
pub use retreat::RetreatPlanner;
pub use roles::{Baseline, Forager, Role, RoleKind, Sentinel};

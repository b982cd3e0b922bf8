//! Decision engine for capture-the-flag agents.
//!
//! The runtime turns a read-only [`StateView`](capture_core::StateView)
//! snapshot into a single [`Heading`](capture_core::Heading) per call. Agents
//! are reflex agents: each role scores every legal action with a weighted sum
//! of hand-crafted features, the best-scoring action wins, and a retreat
//! planner overrides the choice when the match calls for banking food.
//!
//! Modules:
//! - [`api`]: the [`CaptureAgent`] contract, errors, and the role registry
//! - [`providers`]: the reflex agent, its roles, and the maze heuristics
pub mod api;
pub mod providers;

pub use api::{AgentSetup, CaptureAgent, Result, RuntimeError, TeamRegistry};
pub use providers::reflex::{
    AgentContext, Baseline, Feature, FeatureVector, Forager, ReflexAgent, RetreatPlanner, Role,
    RoleKind, Sentinel, WeightTable, is_trap,
};

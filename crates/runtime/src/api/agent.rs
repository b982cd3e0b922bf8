//! Contract between a match host and one controlled agent.
use std::fmt;
use std::sync::Arc;

use capture_core::{AgentConfig, AgentIndex, DistanceOracle, Heading, StateView};

use super::errors::Result;

/// An agent the host drives once per turn.
///
/// The host calls [`CaptureAgent::initialize`] once before the first turn and
/// then [`CaptureAgent::choose_action`] with the agent's (possibly partial)
/// observation. Calls are sequential; an agent only holds its own start
/// position, configuration, and tie-breaking RNG between them.
pub trait CaptureAgent<S: StateView>: Send {
    fn index(&self) -> AgentIndex;

    /// Registry name of the role this agent plays.
    fn role_name(&self) -> &'static str;

    /// Captures match-invariant facts (the start position) from the opening
    /// snapshot.
    fn initialize(&mut self, state: &S);

    /// Picks one of `state.legal_actions(self.index())`.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::NotInitialized`](super::RuntimeError::NotInitialized)
    /// when called before [`CaptureAgent::initialize`].
    fn choose_action(&mut self, state: &S) -> Result<Heading>;
}

/// Everything a factory needs to build one agent.
#[derive(Clone)]
pub struct AgentSetup {
    pub index: AgentIndex,
    pub config: AgentConfig,
    pub distances: Arc<dyn DistanceOracle>,
}

impl AgentSetup {
    pub fn new(index: AgentIndex, config: AgentConfig, distances: Arc<dyn DistanceOracle>) -> Self {
        Self {
            index,
            config,
            distances,
        }
    }

    /// Tie-breaking seed for this agent, distinct per index so teammates
    /// sharing a configured seed do not mirror each other.
    pub fn seed(&self) -> Option<u64> {
        self.config
            .seed
            .map(|seed| seed.wrapping_add(self.index as u64))
    }
}

impl fmt::Debug for AgentSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentSetup")
            .field("index", &self.index)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Reflex agent: one role, one RNG, one start position.

use std::sync::Arc;

use capture_core::{AgentConfig, AgentIndex, DistanceOracle, Heading, Position, StateView};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::{AgentContext, FeatureVector, RetreatPlanner, Role};
use crate::api::{AgentSetup, CaptureAgent, Result, RuntimeError};

/// Agent that plays the best-scoring legal action for its [`Role`].
///
/// # Selection
///
/// 1. Every legal action is scored with [`Role::evaluate`]
/// 2. Actions tied at the maximum form the candidate set; Stop is dropped
///    from it unless it is the only member
/// 3. If [`RetreatPlanner::should_retreat`] holds, the planner's step wins
/// 4. Otherwise one candidate is drawn uniformly at random
///
/// The RNG is owned by the agent and seeded from
/// [`AgentConfig::seed`](capture_core::AgentConfig::seed), so seeded matches
/// replay exactly.
pub struct ReflexAgent<R: Role> {
    role: R,
    index: AgentIndex,
    config: AgentConfig,
    distances: Arc<dyn DistanceOracle>,
    start: Option<Position>,
    rng: StdRng,
}

impl<R: Role> ReflexAgent<R> {
    pub fn new(setup: AgentSetup) -> Self {
        Self::with_role(R::default(), setup)
    }

    pub fn with_role(role: R, setup: AgentSetup) -> Self {
        let rng = match setup.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            role,
            index: setup.index,
            config: setup.config,
            distances: setup.distances,
            start: None,
            rng,
        }
    }

    /// Factory signature used by the [`TeamRegistry`](crate::TeamRegistry).
    pub fn boxed<S: StateView>(setup: AgentSetup) -> Box<dyn CaptureAgent<S>> {
        Box::new(Self::new(setup))
    }

    pub fn role(&self) -> &R {
        &self.role
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Start position captured by [`CaptureAgent::initialize`].
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn context(&self) -> Result<AgentContext<'_>> {
        let start = self.start.ok_or(RuntimeError::NotInitialized(self.index))?;
        Ok(AgentContext::new(
            self.index,
            start,
            &self.config,
            self.distances.as_ref(),
        ))
    }

    /// Features of `action` as this agent's role sees them.
    pub fn features<S: StateView>(&self, state: &S, action: Heading) -> Result<FeatureVector> {
        let ctx = self.context()?;
        Ok(self.role.features(&ctx, state, action))
    }

    /// Score of `action`; a pure function of its inputs.
    pub fn evaluate<S: StateView>(&self, state: &S, action: Heading) -> Result<f64> {
        let ctx = self.context()?;
        Ok(self.role.evaluate(&ctx, state, action))
    }
}

impl<R: Role, S: StateView> CaptureAgent<S> for ReflexAgent<R> {
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn role_name(&self) -> &'static str {
        R::KIND.name()
    }

    fn initialize(&mut self, state: &S) {
        let start = state
            .agent_position(self.index)
            .unwrap_or(state.agent_state(self.index).start);
        tracing::debug!(
            "Agent {} ({}) starts at ({}, {})",
            self.index,
            R::KIND,
            start.x,
            start.y
        );
        self.start = Some(start);
    }

    fn choose_action(&mut self, state: &S) -> Result<Heading> {
        let start = self.start.ok_or(RuntimeError::NotInitialized(self.index))?;
        let ctx = AgentContext::new(self.index, start, &self.config, self.distances.as_ref());
        let actions = state.legal_actions(self.index);

        let scored: Vec<(Heading, f64)> = actions
            .iter()
            .map(|&action| (action, self.role.evaluate(&ctx, state, action)))
            .collect();
        for (action, value) in &scored {
            tracing::trace!("Agent {} scores {} at {}", self.index, action, value);
        }

        let best_value = scored
            .iter()
            .map(|&(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);
        let mut best: Vec<Heading> = scored
            .iter()
            .filter(|&&(_, value)| value == best_value)
            .map(|&(action, _)| action)
            .collect();
        // Stop only wins outright.
        if best.len() > 1 {
            best.retain(|action| !action.is_stop());
        }

        if RetreatPlanner::should_retreat(&ctx, state) {
            let step = RetreatPlanner::plan(&ctx, state, &actions);
            tracing::debug!(
                "Agent {} retreating with {} (best scored: {:?})",
                self.index,
                step,
                best
            );
            return Ok(step);
        }

        match best.choose(&mut self.rng) {
            Some(&action) => {
                tracing::debug!(
                    "Agent {} ({}) selected {} (score: {}, ties: {})",
                    self.index,
                    R::KIND,
                    action,
                    best_value,
                    best.len()
                );
                Ok(action)
            }
            None => {
                tracing::warn!(
                    "Agent {} has no scored action, falling back to Stop",
                    self.index
                );
                Ok(Heading::Stop)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use capture_core::{CaptureState, Layout, MazeDistancer};

    use super::*;
    use crate::providers::reflex::{Baseline, Forager, Sentinel};

    const ARENA: &str = "\
%%%%%%%%%%
%1..  ..2%
%. %% . o%
%3 . %. .%
%o .  . 4%
%%%%%%%%%%
";

    fn setup() -> (CaptureState, Arc<dyn DistanceOracle>) {
        let layout = Layout::parse(ARENA).unwrap();
        let distances: Arc<dyn DistanceOracle> = Arc::new(MazeDistancer::new(&layout));
        (CaptureState::from_layout(layout), distances)
    }

    fn agent<R: Role>(index: AgentIndex, distances: &Arc<dyn DistanceOracle>) -> ReflexAgent<R> {
        let config = AgentConfig::default().with_seed(11);
        ReflexAgent::new(AgentSetup::new(index, config, Arc::clone(distances)))
    }

    #[test]
    fn choose_action_requires_initialize() {
        let (state, distances) = setup();
        let mut forager = agent::<Forager>(0, &distances);
        assert_eq!(
            forager.choose_action(&state),
            Err(RuntimeError::NotInitialized(0))
        );
        forager.initialize(&state);
        assert_eq!(forager.start(), state.agent_position(0));
        assert!(forager.choose_action(&state).is_ok());
    }

    #[test]
    fn chosen_actions_are_always_legal() {
        let (mut state, distances) = setup();
        let mut agents: Vec<Box<dyn CaptureAgent<CaptureState>>> = vec![
            Box::new(agent::<Forager>(0, &distances)),
            Box::new(agent::<Forager>(1, &distances)),
            Box::new(agent::<Sentinel>(2, &distances)),
            Box::new(agent::<Baseline>(3, &distances)),
        ];
        for agent in &mut agents {
            agent.initialize(&state);
        }

        for tick in 0..200 {
            if state.is_over() {
                break;
            }
            let agent = &mut agents[tick % 4];
            let observation = state.observation_for(agent.index());
            let action = agent.choose_action(&observation).unwrap();
            assert!(
                observation.legal_actions(agent.index()).contains(&action),
                "agent {} chose illegal {action} on tick {tick}",
                agent.index()
            );
            state = state.apply(agent.index(), action).unwrap();
        }
    }

    #[test]
    fn evaluate_is_pure() {
        let (state, distances) = setup();
        let mut sentinel = agent::<Sentinel>(2, &distances);
        sentinel.initialize(&state);

        let before = state.clone();
        for action in state.legal_actions(2) {
            let first = sentinel.evaluate(&state, action).unwrap();
            let second = sentinel.evaluate(&state, action).unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn features_stay_within_the_role_vocabulary() {
        let (state, distances) = setup();
        let mut forager = agent::<Forager>(0, &distances);
        let mut sentinel = agent::<Sentinel>(2, &distances);
        CaptureAgent::<CaptureState>::initialize(&mut forager, &state);
        CaptureAgent::<CaptureState>::initialize(&mut sentinel, &state);

        for action in state.legal_actions(0) {
            let features = forager.features(&state, action).unwrap();
            assert!(features.features().all(|f| Forager::WEIGHTS.contains(f)));
        }
        for action in state.legal_actions(2) {
            let features = sentinel.features(&state, action).unwrap();
            assert!(features.features().all(|f| Sentinel::WEIGHTS.contains(f)));
        }
    }

    #[test]
    fn stop_never_wins_a_tie() {
        let (state, distances) = setup();
        // Every action scores zero for the baseline at the opening.
        let mut baseline = agent::<Baseline>(0, &distances);
        CaptureAgent::<CaptureState>::initialize(&mut baseline, &state);
        for _ in 0..50 {
            assert_ne!(baseline.choose_action(&state).unwrap(), Heading::Stop);
        }
    }

    #[test]
    fn seeded_agents_replay_identically() {
        let (state, distances) = setup();
        let play = || {
            let mut baseline = agent::<Baseline>(0, &distances);
            CaptureAgent::<CaptureState>::initialize(&mut baseline, &state);
            (0..20)
                .map(|_| baseline.choose_action(&state).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(play(), play());
    }
}

//! Per-call decision context.
//!
//! [`AgentContext`] bundles what every heuristic needs besides the snapshot
//! itself: who is deciding, where they respawn, the tuning knobs, and the
//! distance oracle. It is rebuilt for each decision and borrows from the
//! agent that owns the data.

use capture_core::{
    AgentConfig, AgentIndex, AgentState, DistanceOracle, Position, StateView, Team,
};

#[derive(Clone, Copy)]
pub struct AgentContext<'a> {
    pub index: AgentIndex,
    pub team: Team,
    /// Respawn cell captured at initialization.
    pub start: Position,
    pub config: &'a AgentConfig,
    distances: &'a dyn DistanceOracle,
}

impl<'a> AgentContext<'a> {
    pub fn new(
        index: AgentIndex,
        start: Position,
        config: &'a AgentConfig,
        distances: &'a dyn DistanceOracle,
    ) -> Self {
        Self {
            index,
            team: Team::of(index),
            start,
            config,
            distances,
        }
    }

    pub fn distance(&self, from: Position, to: Position) -> u32 {
        self.distances.distance(from, to)
    }

    /// Maze distance from `from` to the closest of `targets`, if any.
    pub fn nearest(&self, from: Position, targets: impl IntoIterator<Item = Position>) -> Option<u32> {
        targets
            .into_iter()
            .map(|target| self.distance(from, target))
            .min()
    }

    /// Positions of visible opposing ghosts that are not scared.
    pub fn threatening_ghosts<S: StateView>(&self, state: &S) -> Vec<Position> {
        self.opponent_positions(state, |opponent| opponent.is_threatening_ghost())
    }

    /// Positions of visible opponents raiding this team's half.
    pub fn visible_invaders<S: StateView>(&self, state: &S) -> Vec<Position> {
        self.opponent_positions(state, |opponent| opponent.is_visible_runner())
    }

    fn opponent_positions<S: StateView>(
        &self,
        state: &S,
        keep: impl Fn(&AgentState) -> bool,
    ) -> Vec<Position> {
        state
            .opponents(self.index)
            .into_iter()
            .map(|opponent| state.agent_state(opponent))
            .filter(|opponent| keep(opponent))
            .filter_map(|opponent| opponent.position)
            .collect()
    }
}

impl std::fmt::Debug for AgentContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentContext")
            .field("index", &self.index)
            .field("team", &self.team)
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

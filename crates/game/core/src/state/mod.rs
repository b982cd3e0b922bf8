//! Match state and the rules that advance it.
//!
//! [`CaptureState`] is a value type: every transition clones the dynamic part
//! (food, capsules, agents, score, clock) and shares the immutable
//! [`Layout`] through an `Arc`.
mod agent;
mod layout;
mod position;
mod view;

use std::collections::BTreeSet;
use std::sync::Arc;

pub use agent::{AgentIndex, AgentState, Team};
pub use layout::{Layout, LayoutError};
pub use position::Position;
pub use view::StateView;

use crate::action::{Heading, LegalActions, MoveError};

/// Full snapshot of a match in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureState {
    layout: Arc<Layout>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
    agents: Vec<AgentState>,
    score: i32,
    time_left: u32,
}

impl CaptureState {
    /// Moves an opponent stays harmless after a capsule is eaten.
    pub const SCARED_TIME: u32 = 40;
    /// Manhattan radius within which teammates reveal opponents.
    pub const SIGHT_RANGE: u32 = 5;
    /// Total agent moves in a match.
    pub const INITIAL_TIME_LEFT: u32 = 1200;
    /// The match ends once a side has this much food or less left to collect.
    pub const MIN_FOOD: usize = 2;

    pub fn new(layout: Arc<Layout>) -> Self {
        let mut agents: Vec<AgentState> = layout
            .agent_starts()
            .iter()
            .map(|&start| AgentState::new(start))
            .collect();
        for (index, agent) in agents.iter_mut().enumerate() {
            agent.is_runner = layout.home_team(agent.start) != Team::of(index);
        }

        Self {
            food: layout.food().clone(),
            capsules: layout.capsules().clone(),
            agents,
            score: 0,
            time_left: Self::INITIAL_TIME_LEFT,
            layout,
        }
    }

    pub fn from_layout(layout: Layout) -> Self {
        Self::new(Arc::new(layout))
    }

    pub fn with_time_left(mut self, time_left: u32) -> Self {
        self.time_left = time_left;
        self
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Removes one pellet from the board, as if someone had eaten it.
    pub fn without_food(mut self, position: Position) -> Self {
        self.food.remove(&position);
        self
    }

    /// Moves `agent` to `position` without playing a turn.
    pub fn with_agent_position(mut self, agent: AgentIndex, position: Position) -> Self {
        let on_enemy_half = self.layout.home_team(position) != Team::of(agent);
        if let Some(state) = self.agents.get_mut(agent) {
            state.position = Some(position);
            state.is_runner = on_enemy_half;
        }
        self
    }

    /// Edits one agent's state in place, for scenario setup.
    pub fn with_agent(mut self, agent: AgentIndex, edit: impl FnOnce(&mut AgentState)) -> Self {
        if let Some(state) = self.agents.get_mut(agent) {
            edit(state);
        }
        self
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    pub fn food(&self) -> &BTreeSet<Position> {
        &self.food
    }

    /// Food `team` still has to collect.
    pub fn food_left(&self, team: Team) -> usize {
        self.food
            .iter()
            .filter(|&&position| self.layout.home_team(position) != team)
            .count()
    }

    pub fn is_over(&self) -> bool {
        self.time_left == 0
            || self.food_left(Team::Red) <= Self::MIN_FOOD
            || self.food_left(Team::Blue) <= Self::MIN_FOOD
    }

    pub fn winner(&self) -> Option<Team> {
        match self.score {
            s if s > 0 => Some(Team::Red),
            s if s < 0 => Some(Team::Blue),
            _ => None,
        }
    }

    /// Applies `action` for `agent`, rejecting moves into walls.
    pub fn apply(&self, agent: AgentIndex, action: Heading) -> Result<Self, MoveError> {
        let state = self
            .agents
            .get(agent)
            .ok_or(MoveError::AgentNotFound(agent))?;
        let origin = state.position.ok_or(MoveError::PositionUnknown(agent))?;
        let destination = origin.step(action);
        if self.layout.has_wall(destination) {
            return Err(MoveError::Illegal {
                origin,
                heading: action,
            });
        }

        let mut next = self.clone();
        next.advance(agent, destination, action);
        Ok(next)
    }

    /// Copy of this state as observed by `agent`'s team: opponents farther
    /// than [`Self::SIGHT_RANGE`] from every teammate lose their position.
    pub fn observation_for(&self, agent: AgentIndex) -> Self {
        let team = Team::of(agent);
        let lookouts: Vec<Position> = self
            .agents
            .iter()
            .enumerate()
            .filter(|(index, _)| Team::of(*index) == team)
            .filter_map(|(_, state)| state.position)
            .collect();

        let mut view = self.clone();
        for (index, other) in view.agents.iter_mut().enumerate() {
            if Team::of(index) == team {
                continue;
            }
            let visible = other.position.is_some_and(|position| {
                lookouts
                    .iter()
                    .any(|lookout| lookout.manhattan_distance(position) <= Self::SIGHT_RANGE)
            });
            if !visible {
                other.position = None;
            }
        }
        view
    }

    fn advance(&mut self, agent: AgentIndex, destination: Position, heading: Heading) {
        let team = Team::of(agent);
        let on_enemy_half = self.layout.home_team(destination) != team;
        self.time_left = self.time_left.saturating_sub(1);

        let Some(mover) = self.agents.get_mut(agent) else {
            return;
        };
        mover.position = Some(destination);
        mover.heading = heading;
        mover.is_runner = on_enemy_half;
        mover.scared_timer = mover.scared_timer.saturating_sub(1);

        if on_enemy_half {
            if self.food.remove(&destination) {
                mover.carried.push(destination);
            }
            if self.capsules.remove(&destination) {
                for opponent in self.opponents(agent) {
                    if let Some(state) = self.agents.get_mut(opponent) {
                        state.scared_timer = Self::SCARED_TIME;
                    }
                }
            }
        } else if !mover.carried.is_empty() {
            let returned = std::mem::take(&mut mover.carried);
            self.score += team.score_sign() * returned.len() as i32;
        }

        self.resolve_collisions(agent, destination);
    }

    /// Settles every meeting on `position` after `agent` moved there.
    /// Once the mover itself is captured it has left the cell, so no further
    /// opponent there is affected.
    fn resolve_collisions(&mut self, agent: AgentIndex, position: Position) {
        let mover_is_runner = self.agents.get(agent).is_some_and(|state| state.is_runner);
        for opponent in self.opponents(agent) {
            let Some(other) = self.agents.get(opponent) else {
                continue;
            };
            if other.position != Some(position) {
                continue;
            }

            let (runner, ghost) = if mover_is_runner {
                (agent, opponent)
            } else {
                (opponent, agent)
            };
            let ghost_scared = self.agents.get(ghost).is_some_and(AgentState::is_scared);
            let victim = if ghost_scared { ghost } else { runner };
            self.capture(victim);
            if victim == agent {
                break;
            }
        }
    }

    fn capture(&mut self, victim: AgentIndex) {
        if let Some(state) = self.agents.get_mut(victim) {
            let dropped = state.respawn();
            self.food.extend(dropped);
        }
    }

    fn on_opposing_half(&self, team: Team, positions: &BTreeSet<Position>) -> BTreeSet<Position> {
        positions
            .iter()
            .copied()
            .filter(|&position| self.layout.home_team(position) != team)
            .collect()
    }
}

impl StateView for CaptureState {
    fn legal_actions(&self, agent: AgentIndex) -> LegalActions {
        let mut actions = LegalActions::new();
        if let Some(origin) = self.agent_position(agent) {
            for heading in Heading::CARDINAL {
                if !self.layout.has_wall(origin.step(heading)) {
                    actions.push(heading);
                }
            }
        }
        actions.push(Heading::Stop);
        actions
    }

    /// Illegal actions degrade to `Stop`; use [`CaptureState::apply`] to
    /// reject them instead.
    fn successor(&self, agent: AgentIndex, action: Heading) -> Self {
        self.apply(agent, action)
            .or_else(|_| self.apply(agent, Heading::Stop))
            .unwrap_or_else(|_| self.clone())
    }

    /// # Panics
    ///
    /// Panics if `agent` is not part of the match.
    fn agent_state(&self, agent: AgentIndex) -> &AgentState {
        &self.agents[agent]
    }

    fn targets_for(&self, team: Team) -> BTreeSet<Position> {
        self.on_opposing_half(team, &self.food)
    }

    fn capsules_for(&self, team: Team) -> BTreeSet<Position> {
        self.on_opposing_half(team, &self.capsules)
    }

    fn has_wall(&self, x: i32, y: i32) -> bool {
        self.layout.has_wall(Position::new(x, y))
    }

    fn opponents(&self, agent: AgentIndex) -> Vec<AgentIndex> {
        let team = Team::of(agent);
        (0..self.agents.len())
            .filter(|&index| Team::of(index) != team)
            .collect()
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn time_left(&self) -> u32 {
        self.time_left
    }
}

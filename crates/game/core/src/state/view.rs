use std::collections::BTreeSet;

use crate::action::{Heading, LegalActions};
use crate::state::{AgentIndex, AgentState, Position, Team};

/// Read-only snapshot of a match as seen by one decision call.
///
/// Implementations are immutable: [`StateView::successor`] returns a new,
/// independent snapshot and never touches `self`. Callers uphold the host
/// preconditions: agent indices exist, actions come from
/// [`StateView::legal_actions`], wall queries are in bounds.
pub trait StateView: Sized {
    /// Legal actions for `agent`; always contains [`Heading::Stop`].
    fn legal_actions(&self, agent: AgentIndex) -> LegalActions;

    /// Snapshot after `agent` performs `action`.
    fn successor(&self, agent: AgentIndex, action: Heading) -> Self;

    fn agent_state(&self, agent: AgentIndex) -> &AgentState;

    fn agent_position(&self, agent: AgentIndex) -> Option<Position> {
        self.agent_state(agent).position
    }

    /// Food `team` is trying to collect (located on the opposing half).
    fn targets_for(&self, team: Team) -> BTreeSet<Position>;

    /// Capsules `team` can eat (located on the opposing half).
    fn capsules_for(&self, team: Team) -> BTreeSet<Position>;

    fn has_wall(&self, x: i32, y: i32) -> bool;

    /// Indices of the agents playing against `agent`.
    fn opponents(&self, agent: AgentIndex) -> Vec<AgentIndex>;

    /// Red-positive score.
    fn score(&self) -> i32;

    fn time_left(&self) -> u32;
}

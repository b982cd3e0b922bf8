use crate::action::Heading;
use crate::state::Position;

/// Index of an agent in the match; also its turn order.
pub type AgentIndex = usize;

/// Side of the board an agent plays for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    /// Even agent indices; defends the western half; positive score.
    Red,
    /// Odd agent indices; defends the eastern half; negative score.
    Blue,
}

impl Team {
    pub const fn of(index: AgentIndex) -> Self {
        if index % 2 == 0 { Team::Red } else { Team::Blue }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Sign applied to food returned by this team.
    pub const fn score_sign(self) -> i32 {
        match self {
            Team::Red => 1,
            Team::Blue => -1,
        }
    }

    /// Score seen from this team's side: positive means this team leads.
    pub const fn relative_score(self, score: i32) -> i32 {
        score * self.score_sign()
    }

    pub const fn is_winning(self, score: i32) -> bool {
        self.relative_score(score) > 0
    }
}

/// Per-agent dynamic state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// Respawn point; fixed for the whole match.
    pub start: Position,
    /// `None` when the agent is outside the observer's sight.
    pub position: Option<Position>,
    pub heading: Heading,
    /// On the opposing half (a runner) rather than defending (a ghost).
    pub is_runner: bool,
    /// Moves left during which this agent cannot catch runners.
    pub scared_timer: u32,
    /// Food picked up on the opposing half and not yet brought home.
    pub carried: Vec<Position>,
}

impl AgentState {
    pub fn new(start: Position) -> Self {
        Self {
            start,
            position: Some(start),
            heading: Heading::Stop,
            is_runner: false,
            scared_timer: 0,
            carried: Vec::new(),
        }
    }

    pub fn num_carrying(&self) -> u32 {
        self.carried.len() as u32
    }

    pub const fn is_ghost(&self) -> bool {
        !self.is_runner
    }

    pub const fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }

    /// A visible defender able to catch runners.
    pub fn is_threatening_ghost(&self) -> bool {
        self.is_ghost() && !self.is_scared() && self.position.is_some()
    }

    /// A visible runner on its enemy's half.
    pub fn is_visible_runner(&self) -> bool {
        self.is_runner && self.position.is_some()
    }

    /// Sends the agent back to its start, dropping anything it carried.
    pub(crate) fn respawn(&mut self) -> Vec<Position> {
        self.position = Some(self.start);
        self.heading = Heading::Stop;
        self.is_runner = false;
        self.scared_timer = 0;
        std::mem::take(&mut self.carried)
    }
}

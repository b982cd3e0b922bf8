use arrayvec::ArrayVec;

use crate::state::{AgentIndex, Position};

/// Legal actions for one agent: up to four headings plus `Stop`.
pub type LegalActions = ArrayVec<Heading, 5>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentIndex),

    #[error("agent {0} has no observable position")]
    PositionUnknown(AgentIndex),

    #[error("{heading} from {origin:?} is blocked")]
    Illegal { origin: Position, heading: Heading },
}

/// Direction an agent faces or moves in.
///
/// North increases `y`; East increases `x`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Heading {
    North,
    South,
    East,
    West,
    #[default]
    Stop,
}

impl Heading {
    pub const CARDINAL: [Heading; 4] = [
        Heading::North,
        Heading::South,
        Heading::East,
        Heading::West,
    ];

    /// Opposite heading. `Stop` maps to itself.
    pub const fn reverse(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
            Heading::Stop => Heading::Stop,
        }
    }

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
            Heading::Stop => (0, 0),
        }
    }

    pub const fn is_stop(self) -> bool {
        matches!(self, Heading::Stop)
    }
}

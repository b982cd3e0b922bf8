//! Static maze geometry parsed from the text layout format.
//!
//! ```text
//! %%%%%%%%
//! %1 .  o%
//! %o  . 2%
//! %%%%%%%%
//! ```
//!
//! `%` wall, `.` food, `o` capsule, digits are agent starts (agent index is
//! the digit minus one), space is open floor. The first row is the top of the
//! map, i.e. the largest `y`.
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::state::{AgentIndex, Position, Team};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },

    #[error("agent {0} is placed more than once")]
    DuplicateAgent(AgentIndex),

    #[error("agent {0} is missing; agent indices must be contiguous")]
    MissingAgent(AgentIndex),

    #[error("layout places {0} agents, at least two are required")]
    TooFewAgents(usize),
}

/// Immutable maze: walls, initial food and capsules, agent start positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    width: u32,
    height: u32,
    walls: Vec<bool>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
    agent_starts: Vec<Position>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let expected = rows.first().ok_or(LayoutError::Empty)?.chars().count();
        let height = rows.len();

        let mut walls = vec![false; expected * height];
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();
        let mut agents: BTreeMap<AgentIndex, Position> = BTreeMap::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            let y = (height - 1 - row) as i32;
            for (column, tile) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);
                match tile {
                    '%' => walls[(y as usize) * expected + column] = true,
                    '.' => {
                        food.insert(position);
                    }
                    'o' => {
                        capsules.insert(position);
                    }
                    ' ' => {}
                    '1'..='9' => {
                        let index = tile as usize - '1' as usize;
                        if agents.insert(index, position).is_some() {
                            return Err(LayoutError::DuplicateAgent(index));
                        }
                    }
                    _ => return Err(LayoutError::UnknownTile { tile, row, column }),
                }
            }
        }

        if agents.len() < 2 {
            return Err(LayoutError::TooFewAgents(agents.len()));
        }
        let mut agent_starts = Vec::with_capacity(agents.len());
        for (expected_index, (index, position)) in agents.into_iter().enumerate() {
            if index != expected_index {
                return Err(LayoutError::MissingAgent(expected_index));
            }
            agent_starts.push(position);
        }

        Ok(Self {
            width: expected as u32,
            height: height as u32,
            walls,
            food,
            capsules,
            agent_starts,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major cell index, or `None` outside the grid.
    pub fn cell_index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Out-of-bounds cells count as walls.
    pub fn has_wall(&self, position: Position) -> bool {
        self.cell_index(position)
            .and_then(|index| self.walls.get(index).copied())
            .unwrap_or(true)
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
            .filter(|&position| !self.has_wall(position))
    }

    pub fn food(&self) -> &BTreeSet<Position> {
        &self.food
    }

    pub fn capsules(&self) -> &BTreeSet<Position> {
        &self.capsules
    }

    pub fn agent_starts(&self) -> &[Position] {
        &self.agent_starts
    }

    pub fn num_agents(&self) -> usize {
        self.agent_starts.len()
    }

    /// Team whose home half contains `position`. Red owns `x < width / 2`.
    pub fn home_team(&self, position: Position) -> Team {
        if position.x < (self.width / 2) as i32 {
            Team::Red
        } else {
            Team::Blue
        }
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

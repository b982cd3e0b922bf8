//! Read-only oracles over static match data.
//!
//! The decision engine never walks the maze itself; it asks a
//! [`DistanceOracle`] for shortest-path lengths so hosts can plug in a
//! precomputed table ([`MazeDistancer`]) or any cheaper approximation.
mod distance;

pub use distance::MazeDistancer;

use crate::state::Position;

/// Shortest-path distance between two cells, respecting walls.
///
/// Both positions must be open cells; answers for walls or out-of-bounds
/// cells are implementation defined.
pub trait DistanceOracle: Send + Sync {
    fn distance(&self, from: Position, to: Position) -> u32;
}

use std::collections::VecDeque;

use crate::action::Heading;
use crate::env::DistanceOracle;
use crate::state::{Layout, Position};

/// All-pairs maze distances computed once per layout by breadth-first search.
///
/// Queries touching a wall or an out-of-bounds cell fall back to Manhattan
/// distance, as do pairs in disconnected regions.
#[derive(Clone, Debug)]
pub struct MazeDistancer {
    width: u32,
    height: u32,
    /// `cells * cells` table indexed by layout cell index; `u32::MAX` when
    /// unreachable.
    table: Vec<u32>,
}

impl MazeDistancer {
    const UNREACHABLE: u32 = u32::MAX;

    pub fn new(layout: &Layout) -> Self {
        let cells = (layout.width() * layout.height()) as usize;
        let mut table = vec![Self::UNREACHABLE; cells * cells];

        let mut queue = VecDeque::new();
        for source in layout.open_cells() {
            let Some(source_index) = layout.cell_index(source) else {
                continue;
            };
            let row = &mut table[source_index * cells..(source_index + 1) * cells];
            row[source_index] = 0;
            queue.clear();
            queue.push_back(source);

            while let Some(current) = queue.pop_front() {
                let Some(current_index) = layout.cell_index(current) else {
                    continue;
                };
                let next_distance = row[current_index] + 1;
                for heading in Heading::CARDINAL {
                    let neighbour = current.step(heading);
                    if layout.has_wall(neighbour) {
                        continue;
                    }
                    let Some(neighbour_index) = layout.cell_index(neighbour) else {
                        continue;
                    };
                    if row[neighbour_index] == Self::UNREACHABLE {
                        row[neighbour_index] = next_distance;
                        queue.push_back(neighbour);
                    }
                }
            }
        }

        Self {
            width: layout.width(),
            height: layout.height(),
            table,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let inside = position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32;
        inside.then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

impl DistanceOracle for MazeDistancer {
    fn distance(&self, from: Position, to: Position) -> u32 {
        let cells = (self.width * self.height) as usize;
        let known = self
            .index(from)
            .zip(self.index(to))
            .and_then(|(a, b)| self.table.get(a * cells + b).copied())
            .filter(|&distance| distance != Self::UNREACHABLE);

        known.unwrap_or_else(|| from.manhattan_distance(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
%%%%%%%
%1  % %
%%% % %
%     %
%%%%%2%
";

    #[test]
    fn distances_follow_corridors() {
        let layout = Layout::parse(MAZE).unwrap();
        let distancer = MazeDistancer::new(&layout);

        let start = Position::new(1, 3);
        assert_eq!(distancer.distance(start, start), 0);
        assert_eq!(distancer.distance(start, Position::new(3, 3)), 2);
        // Around the wall at (4, 3): down the column at x = 3, along y = 1.
        assert_eq!(distancer.distance(start, Position::new(5, 3)), 8);
    }

    #[test]
    fn distances_are_symmetric() {
        let layout = Layout::parse(MAZE).unwrap();
        let distancer = MazeDistancer::new(&layout);
        let a = Position::new(1, 3);
        let b = Position::new(5, 0);
        assert_eq!(distancer.distance(a, b), distancer.distance(b, a));
    }

    #[test]
    fn wall_queries_fall_back_to_manhattan() {
        let layout = Layout::parse(MAZE).unwrap();
        let distancer = MazeDistancer::new(&layout);
        assert_eq!(
            distancer.distance(Position::new(0, 0), Position::new(2, 2)),
            4
        );
    }
}

//! Bounded dead-end detection.
//!
//! Walks forward from a cell along every opening except the way back and
//! reports whether every branch runs into a wall within the horizon. Branches
//! still open when the horizon runs out count as escapes.

use arrayvec::ArrayVec;
use capture_core::{Heading, Position, StateView};

/// Openings other than the reverse of the current heading. Four when the
/// heading is [`Heading::Stop`], at most three otherwise.
type Exits = ArrayVec<Heading, 4>;

#[derive(Clone, Copy, Debug)]
struct Probe {
    position: Position,
    heading: Heading,
    steps: u32,
}

/// Whether moving on from `position` while facing `heading` leads only into
/// walls within `max_steps` further moves.
///
/// With `max_steps == 0` only the immediate surroundings count: the answer is
/// `true` exactly when every non-reverse neighbour is a wall.
pub fn is_trap<S: StateView>(state: &S, position: Position, heading: Heading, max_steps: u32) -> bool {
    explore(
        state,
        Probe {
            position,
            heading,
            steps: 0,
        },
        max_steps,
    )
}

fn explore<S: StateView>(state: &S, probe: Probe, max_steps: u32) -> bool {
    let position = if probe.steps == 0 {
        probe.position
    } else {
        probe.position.step(probe.heading)
    };

    let exits = open_exits(state, position, probe.heading);
    if exits.is_empty() {
        return true;
    }
    if probe.steps >= max_steps {
        return false;
    }

    exits.into_iter().all(|exit| {
        explore(
            state,
            Probe {
                position,
                heading: exit,
                steps: probe.steps + 1,
            },
            max_steps,
        )
    })
}

fn open_exits<S: StateView>(state: &S, position: Position, heading: Heading) -> Exits {
    let back = heading.reverse();
    Heading::CARDINAL
        .into_iter()
        .filter(|&exit| exit != back)
        .filter(|&exit| {
            let next = position.step(exit);
            !state.has_wall(next.x, next.y)
        })
        .collect()
}

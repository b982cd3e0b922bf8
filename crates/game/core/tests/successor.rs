use capture_core::{CaptureState, Heading, Layout, Position, StateView};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

const MAZE: &str = "\
%%%%%%%%%%%%
%1 . %  o 2%
% %% % %%. %
%3o  . %  4%
%%%%%%%%%%%%
";

fn state() -> CaptureState {
    CaptureState::from_layout(Layout::parse(MAZE).unwrap())
}

fn is_one_step(from: Position, to: Position) -> bool {
    from.manhattan_distance(to) <= 1
}

#[test]
fn every_legal_action_moves_at_most_one_cell() {
    let state = state();
    for agent in 0..state.num_agents() {
        let origin = state.agent_position(agent).unwrap();
        for action in state.legal_actions(agent) {
            let next = state.successor(agent, action);
            let landed = next.agent_position(agent).unwrap();
            assert!(
                is_one_step(origin, landed),
                "agent {agent} jumped from {origin:?} to {landed:?} on {action}"
            );
            assert_eq!(landed, origin.step(action));
            assert_eq!(next.agent_state(agent).heading, action);
        }
    }
}

#[test]
fn successor_leaves_the_original_untouched() {
    let state = state();
    let before = state.clone();
    let _ = state.successor(0, Heading::East);
    assert_eq!(state, before);
}

#[test]
fn random_walk_never_teleports_outside_captures() {
    let mut state = state();
    let mut rng = StdRng::seed_from_u64(7);
    for tick in 0..400 {
        let agent = tick % state.num_agents();
        let actions = state.legal_actions(agent);
        let action = *actions.choose(&mut rng).unwrap();

        let origin = state.agent_position(agent).unwrap();
        let next = state.successor(agent, action);
        let landed = next.agent_position(agent).unwrap();
        let respawned = landed == next.agent_state(agent).start;
        assert!(is_one_step(origin, landed) || respawned);
        state = next;
    }
}

#[test]
fn illegal_successor_degrades_to_stop() {
    let state = state();
    let next = state.successor(0, Heading::North);
    assert_eq!(next.agent_position(0), state.agent_position(0));
    assert_eq!(next.agent_state(0).heading, Heading::Stop);
}

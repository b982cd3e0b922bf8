//! End-to-end action selection through the `CaptureAgent` contract.

use std::sync::Arc;

use capture_core::{
    AgentConfig, CaptureState, DistanceOracle, Heading, Layout, MazeDistancer, Position,
    StateView,
};
use capture_runtime::{AgentSetup, CaptureAgent, Forager, ReflexAgent, Sentinel};

// Red holds x < 6. Agent 0 ('1') raids, agent 2 ('3') defends.
const ROOM: &str = "\
%%%%%%%%%%%%
%1   ..  . %
%    .. .  %
%3    .   4%
%       .2 %
%%%%%%%%%%%%
";

fn setup() -> (CaptureState, Arc<dyn DistanceOracle>) {
    let layout = Layout::parse(ROOM).unwrap();
    let distances: Arc<dyn DistanceOracle> = Arc::new(MazeDistancer::new(&layout));
    (CaptureState::from_layout(layout), distances)
}

fn seeded(index: usize, distances: &Arc<dyn DistanceOracle>) -> AgentSetup {
    AgentSetup::new(index, AgentConfig::default().with_seed(3), Arc::clone(distances))
}

#[test]
fn two_targets_left_sends_the_forager_home() {
    let (state, distances) = setup();
    let mut forager = ReflexAgent::<Forager>::new(seeded(0, &distances));
    CaptureAgent::<CaptureState>::initialize(&mut forager, &state);

    // Only (9, 4) and (8, 3) remain; both lie east of the raider.
    let state = [(6, 4), (6, 3), (6, 2), (8, 1)]
        .into_iter()
        .fold(state, |state, (x, y)| state.without_food(Position::new(x, y)))
        .with_agent_position(0, Position::new(7, 4));
    assert_eq!(state.targets_for(capture_core::Team::Red).len(), 2);

    let greedy = state
        .legal_actions(0)
        .into_iter()
        .max_by(|a, b| {
            let a = forager.evaluate(&state, *a).unwrap();
            let b = forager.evaluate(&state, *b).unwrap();
            a.total_cmp(&b)
        })
        .unwrap();
    assert_ne!(greedy, Heading::West);

    assert_eq!(forager.choose_action(&state).unwrap(), Heading::West);
}

#[test]
fn selection_stays_within_the_best_scored_actions() {
    let (state, distances) = setup();
    let mut forager = ReflexAgent::<Forager>::new(seeded(0, &distances));
    CaptureAgent::<CaptureState>::initialize(&mut forager, &state);
    // Three targets left and a comfortable lead: no retreat.
    let state = [(6, 4), (6, 3), (8, 1)]
        .into_iter()
        .fold(state, |state, (x, y)| state.without_food(Position::new(x, y)))
        .with_agent_position(0, Position::new(7, 4))
        .with_score(10);

    let scores: Vec<(Heading, f64)> = state
        .legal_actions(0)
        .into_iter()
        .map(|action| (action, forager.evaluate(&state, action).unwrap()))
        .collect();
    let best = scores
        .iter()
        .map(|&(_, value)| value)
        .fold(f64::NEG_INFINITY, f64::max);

    for _ in 0..10 {
        let action = forager.choose_action(&state).unwrap();
        let (_, value) = scores.iter().find(|(a, _)| *a == action).unwrap();
        assert_eq!(*value, best, "{action} is not among the best");
    }
}

#[test]
fn sentinel_closes_in_on_a_visible_invader() {
    let (state, distances) = setup();
    let mut sentinel = ReflexAgent::<Sentinel>::new(seeded(2, &distances));
    CaptureAgent::<CaptureState>::initialize(&mut sentinel, &state);

    let state = state.with_agent_position(1, Position::new(3, 2));
    assert!(state.agent_state(1).is_visible_runner());
    assert_eq!(sentinel.choose_action(&state).unwrap(), Heading::East);
}

#[test]
fn sentinel_takes_the_capture() {
    let (state, distances) = setup();
    let mut sentinel = ReflexAgent::<Sentinel>::new(seeded(2, &distances));
    CaptureAgent::<CaptureState>::initialize(&mut sentinel, &state);

    let state = state
        .with_agent_position(2, Position::new(2, 2))
        .with_agent_position(1, Position::new(3, 2));
    let features = sentinel.features(&state, Heading::East).unwrap();
    assert_eq!(features.get(capture_runtime::Feature::EnemiesNeutralized), 1.0);
    assert_eq!(sentinel.choose_action(&state).unwrap(), Heading::East);
}

#[test]
fn sentinel_without_invaders_avoids_stopping() {
    let (state, distances) = setup();
    let mut sentinel = ReflexAgent::<Sentinel>::new(seeded(2, &distances));
    CaptureAgent::<CaptureState>::initialize(&mut sentinel, &state);
    for _ in 0..10 {
        assert_ne!(sentinel.choose_action(&state).unwrap(), Heading::Stop);
    }
}

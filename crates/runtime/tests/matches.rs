//! Full matches on the bundled layout.

use std::sync::Arc;

use capture_content::ContentFactory;
use capture_core::{CaptureState, DistanceOracle, Heading, MazeDistancer, StateView, Team};
use capture_runtime::{CaptureAgent, TeamRegistry};

fn play(red: [&str; 2], blue: [&str; 2], seed: u64, ticks: usize) -> (CaptureState, Vec<Heading>) {
    let content = ContentFactory::bundled();
    let layout = Arc::new(content.load_layout("default_capture").unwrap());
    let config = content.load_config().unwrap().with_seed(seed);
    let distances: Arc<dyn DistanceOracle> = Arc::new(MazeDistancer::new(&layout));

    let registry = TeamRegistry::<CaptureState>::with_defaults();
    let [r0, r1] = registry
        .create_team([0, 2], red, &config, Arc::clone(&distances))
        .unwrap();
    let [b0, b1] = registry
        .create_team([1, 3], blue, &config, Arc::clone(&distances))
        .unwrap();
    let mut agents: Vec<Box<dyn CaptureAgent<CaptureState>>> = vec![r0, b0, r1, b1];

    let mut state = CaptureState::new(layout);
    for agent in &mut agents {
        agent.initialize(&state.observation_for(agent.index()));
    }

    let mut moves = Vec::new();
    for tick in 0..ticks {
        if state.is_over() {
            break;
        }
        let agent = &mut agents[tick % 4];
        let index = agent.index();
        let observation = state.observation_for(index);
        let action = agent.choose_action(&observation).unwrap();
        assert!(state.legal_actions(index).contains(&action));
        state = state.apply(index, action).unwrap();
        moves.push(action);
    }
    (state, moves)
}

#[test]
fn tournament_roles_play_a_full_match() {
    let (state, moves) = play(["forager", "sentinel"], ["forager", "sentinel"], 5, 1200);
    assert!(!moves.is_empty());
    assert!(state.time_left() <= CaptureState::INITIAL_TIME_LEFT);
}

#[test]
fn seeded_matches_replay_move_for_move() {
    let first = play(["forager", "sentinel"], ["baseline", "forager"], 42, 300);
    let second = play(["forager", "sentinel"], ["baseline", "forager"], 42, 300);
    assert_eq!(first.1, second.1);
    assert_eq!(first.0, second.0);
}

#[test]
fn foragers_make_progress_against_baselines() {
    let initial = CaptureState::new(Arc::new(
        ContentFactory::bundled()
            .load_layout("default_capture")
            .unwrap(),
    ));
    let (state, _) = play(["forager", "forager"], ["baseline", "baseline"], 9, 1200);
    assert!(
        state.score() > 0 || state.food_left(Team::Red) < initial.food_left(Team::Red),
        "foragers never touched the enemy food"
    );
}

//! Turn loop driving four agents over a [`CaptureState`].

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result, bail, ensure};
use capture_core::{
    AgentConfig, CaptureState, DistanceOracle, GameError, Layout, MazeDistancer, StateView, Team,
};
use capture_runtime::{CaptureAgent, TeamRegistry};

use crate::args::TeamRoles;

/// Result of one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Red-positive.
    pub score: i32,
    pub winner: Option<Team>,
    pub ticks: u32,
    /// Whether the match ended by its own rules rather than the tick limit.
    pub finished: bool,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.winner {
            Some(team) => format!("{team} wins"),
            None => "tie".to_owned(),
        };
        write!(f, "score {} after {} moves: {}", self.score, self.ticks, verdict)?;
        if !self.finished {
            write!(f, " (stopped at move limit)")?;
        }
        Ok(())
    }
}

pub struct MatchRunner {
    state: CaptureState,
    agents: Vec<Box<dyn CaptureAgent<CaptureState>>>,
    max_ticks: u32,
}

impl MatchRunner {
    /// Build both teams on `layout`. Every role name is checked before any
    /// agent is created.
    pub fn new(
        layout: Layout,
        config: &AgentConfig,
        red: &TeamRoles,
        blue: &TeamRoles,
    ) -> Result<Self> {
        ensure!(
            layout.num_agents() == 4,
            "layout places {} agents, a match needs exactly 4",
            layout.num_agents()
        );

        let registry = TeamRegistry::<CaptureState>::with_defaults();
        registry
            .validate(red.names().into_iter().chain(blue.names()))
            .context("Invalid team roles")?;

        let distances: Arc<dyn DistanceOracle> = Arc::new(MazeDistancer::new(&layout));
        let [red_first, red_second] =
            registry.create_team([0, 2], red.names(), config, Arc::clone(&distances))?;
        let [blue_first, blue_second] =
            registry.create_team([1, 3], blue.names(), config, distances)?;

        Ok(Self {
            state: CaptureState::from_layout(layout),
            agents: vec![red_first, blue_first, red_second, blue_second],
            max_ticks: CaptureState::INITIAL_TIME_LEFT,
        })
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn run(mut self) -> Result<MatchOutcome> {
        for agent in &mut self.agents {
            let observation = self.state.observation_for(agent.index());
            agent.initialize(&observation);
        }

        let mut ticks = 0;
        while !self.state.is_over() && ticks < self.max_ticks {
            let turn = ticks as usize % self.agents.len();
            let agent = &mut self.agents[turn];
            let index = agent.index();

            let observation = self.state.observation_for(index);
            let action = agent
                .choose_action(&observation)
                .with_context(|| format!("Agent {index} failed to choose an action"))?;
            self.state = match self.state.apply(index, action) {
                Ok(next) => next,
                Err(err) => {
                    tracing::error!(
                        "Agent {} move rejected [{}, {}]: {}",
                        index,
                        err.error_code(),
                        err.severity().as_str(),
                        err
                    );
                    bail!(
                        "Agent {index} ({}) played {action}: {err} [{}]",
                        agent.role_name(),
                        err.error_code()
                    )
                }
            };
            tracing::debug!("Move {}: agent {} plays {}", ticks, index, action);
            ticks += 1;
        }

        let outcome = MatchOutcome {
            score: self.state.score(),
            winner: self.state.winner(),
            ticks,
            finished: self.state.is_over(),
        };
        tracing::info!(
            "Match ended after {} moves with score {}",
            outcome.ticks,
            outcome.score
        );
        Ok(outcome)
    }
}

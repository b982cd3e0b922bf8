//! Retreat override: when to head home and which step gets there safely.

use capture_core::{Heading, StateView};

use super::AgentContext;

/// Decides when banking food beats collecting more, and picks the step.
#[derive(Clone, Copy, Debug, Default)]
pub struct RetreatPlanner;

impl RetreatPlanner {
    /// Whether the agent should stop scoring features and go home.
    ///
    /// True when few enough targets remain, or late in a match the team is
    /// not winning while this agent, as a runner, carries more than the
    /// configured [`CarryRule`](capture_core::CarryRule) allows.
    pub fn should_retreat<S: StateView>(ctx: &AgentContext<'_>, state: &S) -> bool {
        let config = ctx.config;
        if state.targets_for(ctx.team).len() <= config.retreat_food_threshold {
            return true;
        }

        let me = state.agent_state(ctx.index);
        me.is_runner
            && state.time_left() < config.late_game_threshold
            && !ctx.team.is_winning(state.score())
            && config
                .carry_rule
                .is_over_committed(me.num_carrying(), state.score())
    }

    /// Step among `actions` that brings the agent closest to its start
    /// without closing in on a threatening ghost.
    ///
    /// A step is safe when no ghost is visible, when it keeps the nearest
    /// ghost beyond the safety distance, or when it does not bring the
    /// nearest ghost any closer. Returns [`Heading::Stop`] when no step is
    /// safe.
    pub fn plan<S: StateView>(ctx: &AgentContext<'_>, state: &S, actions: &[Heading]) -> Heading {
        let Some(current) = state.agent_position(ctx.index) else {
            return Heading::Stop;
        };
        let ghosts = ctx.threatening_ghosts(state);
        let threat_now = ctx.nearest(current, ghosts.iter().copied());

        let mut best = None;
        for &action in actions {
            let landed = current.step(action);
            let home_distance = ctx.distance(ctx.start, landed);
            let safe = match threat_now {
                None => true,
                Some(now) => ctx
                    .nearest(landed, ghosts.iter().copied())
                    .is_none_or(|then| then > ctx.config.retreat_safety_distance || then >= now),
            };
            tracing::trace!(
                "Agent {} retreat candidate {} (home: {}, safe: {})",
                ctx.index,
                action,
                home_distance,
                safe
            );
            if safe && best.is_none_or(|(_, closest)| home_distance < closest) {
                best = Some((action, home_distance));
            }
        }

        best.map_or(Heading::Stop, |(action, _)| action)
    }
}

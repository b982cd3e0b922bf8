use capture_core::{Heading, StateView};

use super::{Role, RoleKind};
use crate::providers::reflex::{AgentContext, Feature, FeatureVector, WeightTable, is_trap};

/// Defensive role: stay home, chase visible invaders, and keep out of dead
/// ends while there is nobody to chase.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sentinel;

impl Sentinel {
    pub const WEIGHTS: WeightTable = WeightTable::new(&[
        (Feature::OnDefense, 10_000.0),
        (Feature::EnemiesNeutralized, 9_000.0),
        (Feature::InvaderDistance, -10.0),
        (Feature::EmptyCorridorDanger, -1_000.0),
        (Feature::Stopped, -100.0),
        (Feature::Reversed, -2.0),
    ]);
}

impl Role for Sentinel {
    const KIND: RoleKind = RoleKind::Sentinel;

    fn features<S: StateView>(
        &self,
        ctx: &AgentContext<'_>,
        state: &S,
        action: Heading,
    ) -> FeatureVector {
        let config = ctx.config;
        let successor = state.successor(ctx.index, action);
        let me = successor.agent_state(ctx.index);

        let mut features = FeatureVector::new();
        if !me.is_runner {
            features.flag(Feature::OnDefense);
        }

        // Invaders seen before the move that the move sent back to their start.
        let invaders_before: Vec<_> = state
            .opponents(ctx.index)
            .into_iter()
            .filter(|&opponent| state.agent_state(opponent).is_visible_runner())
            .collect();
        let mut neutralized = 0;
        if !invaders_before.is_empty() {
            neutralized = invaders_before
                .iter()
                .map(|&opponent| successor.agent_state(opponent))
                .filter(|after| !after.is_runner && after.position == Some(after.start))
                .count();
            features.set(Feature::EnemiesNeutralized, neutralized as f64);
        }

        let invaders_after = ctx.visible_invaders(&successor);
        let nearest_invader = me
            .position
            .and_then(|position| ctx.nearest(position, invaders_after));
        match nearest_invader {
            Some(distance) => features.set(
                Feature::InvaderDistance,
                f64::from(distance.min(config.invader_distance_cap)),
            ),
            None => {
                features.set(
                    Feature::InvaderDistance,
                    f64::from(config.invader_distance_cap + 1),
                );
                let cornered = me.position.is_some_and(|position| {
                    is_trap(&successor, position, me.heading, config.sentinel_trap_horizon)
                });
                if neutralized == 0 && cornered {
                    features.flag(Feature::EmptyCorridorDanger);
                }
            }
        }

        if action.is_stop() {
            features.flag(Feature::Stopped);
        }
        if action == state.agent_state(ctx.index).heading.reverse() {
            features.flag(Feature::Reversed);
        }

        features
    }

    fn weights(&self) -> &'static WeightTable {
        &Self::WEIGHTS
    }
}

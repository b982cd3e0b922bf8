use capture_core::{Heading, StateView};

use super::{Role, RoleKind};
use crate::providers::reflex::{AgentContext, Feature, FeatureVector, WeightTable, is_trap};

/// Offensive role: eat food and capsules on the enemy half, keep away from
/// ghosts, and never walk into a dead end with a ghost behind.
#[derive(Clone, Copy, Debug, Default)]
pub struct Forager;

impl Forager {
    pub const WEIGHTS: WeightTable = WeightTable::new(&[
        (Feature::RemainingTargets, 10_000.0),
        (Feature::CapsulePenalty, 20_000.0),
        (Feature::ThreatDistance, -2.0),
        (Feature::ThreatClose, -200.0),
        (Feature::NearestTargetDistance, -10.0),
        (Feature::NearestCapsuleDistance, -30.0),
        (Feature::TrapDanger, -5_000.0),
        (Feature::Stopped, -6_000.0),
    ]);
}

impl Role for Forager {
    const KIND: RoleKind = RoleKind::Forager;

    fn features<S: StateView>(
        &self,
        ctx: &AgentContext<'_>,
        state: &S,
        action: Heading,
    ) -> FeatureVector {
        let config = ctx.config;
        let successor = state.successor(ctx.index, action);
        let targets = successor.targets_for(ctx.team);
        let capsules = successor.capsules_for(ctx.team);

        let mut features = FeatureVector::new();
        features.set(Feature::RemainingTargets, -(targets.len() as f64));
        features.set(Feature::CapsulePenalty, -(capsules.len() as f64));
        if action.is_stop() {
            features.flag(Feature::Stopped);
        }

        let me = successor.agent_state(ctx.index);
        let Some(position) = me.position else {
            return features;
        };

        if let Some(distance) = ctx.nearest(position, ctx.threatening_ghosts(&successor)) {
            let threat = distance.min(config.threat_distance_cap);
            features.set(Feature::ThreatDistance, f64::from(threat));
            if threat <= config.threat_close_distance {
                features.flag(Feature::ThreatClose);
                if is_trap(&successor, position, me.heading, config.forager_trap_horizon) {
                    features.flag(Feature::TrapDanger);
                }
            }
        }

        if let Some(distance) = ctx.nearest(position, targets) {
            features.set(Feature::NearestTargetDistance, f64::from(distance));
        }
        if let Some(distance) = ctx.nearest(position, capsules) {
            features.set(
                Feature::NearestCapsuleDistance,
                f64::from(distance.min(config.capsule_distance_cap)),
            );
        }

        features
    }

    fn weights(&self) -> &'static WeightTable {
        &Self::WEIGHTS
    }
}

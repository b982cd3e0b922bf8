use capture_core::{Heading, StateView};

use super::{Role, RoleKind};
use crate::providers::reflex::{AgentContext, Feature, FeatureVector, WeightTable};

/// Greedy score-chaser: prefers whatever raises the team's score right now.
#[derive(Clone, Copy, Debug, Default)]
pub struct Baseline;

impl Baseline {
    pub const WEIGHTS: WeightTable = WeightTable::new(&[(Feature::SuccessorScore, 1.0)]);
}

impl Role for Baseline {
    const KIND: RoleKind = RoleKind::Baseline;

    fn features<S: StateView>(
        &self,
        ctx: &AgentContext<'_>,
        state: &S,
        action: Heading,
    ) -> FeatureVector {
        let successor = state.successor(ctx.index, action);
        let mut features = FeatureVector::new();
        features.set(
            Feature::SuccessorScore,
            f64::from(ctx.team.relative_score(successor.score())),
        );
        features
    }

    fn weights(&self) -> &'static WeightTable {
        &Self::WEIGHTS
    }
}

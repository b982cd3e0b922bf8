//! Roles: what an agent values.
//!
//! A role extracts features for one (state, action) pair and owns the fixed
//! weights they are scored with. Roles hold no state, so the same role value
//! can evaluate any number of candidates in any order.

mod baseline;
mod forager;
mod sentinel;

pub use baseline::Baseline;
pub use forager::Forager;
pub use sentinel::Sentinel;

use capture_core::{Heading, StateView};

use super::{AgentContext, FeatureVector, WeightTable};

/// Registry names of the stock roles.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoleKind {
    Baseline,
    Forager,
    Sentinel,
}

impl RoleKind {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

pub trait Role: Default + Send + Sync + 'static {
    const KIND: RoleKind;

    /// Features of the snapshot reached by `action`; keys are drawn from
    /// [`Role::weights`].
    fn features<S: StateView>(
        &self,
        ctx: &AgentContext<'_>,
        state: &S,
        action: Heading,
    ) -> FeatureVector;

    /// Fixed weights; independent of the state being scored.
    fn weights(&self) -> &'static WeightTable;

    fn evaluate<S: StateView>(&self, ctx: &AgentContext<'_>, state: &S, action: Heading) -> f64 {
        self.features(ctx, state, action).dot(self.weights())
    }
}

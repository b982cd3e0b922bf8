//! Role registry for assembling teams by name.
//!
//! The [`TeamRegistry`] maps role names (`"forager"`, `"sentinel"`,
//! `"baseline"`) to agent factories. Hosts resolve every name up front so a
//! typo fails before the first turn instead of mid-match.

use std::collections::BTreeMap;
use std::sync::Arc;

use capture_core::{AgentConfig, AgentIndex, DistanceOracle, StateView, Team};

use super::{AgentSetup, CaptureAgent, Result, RuntimeError};
use crate::providers::reflex::{Baseline, Forager, ReflexAgent, RoleKind, Sentinel};

/// Builds one boxed agent from its setup.
pub type AgentFactory<S> = fn(AgentSetup) -> Box<dyn CaptureAgent<S>>;

/// Registry of agent factories keyed by role name.
pub struct TeamRegistry<S: StateView> {
    factories: BTreeMap<String, AgentFactory<S>>,
}

impl<S: StateView> TeamRegistry<S> {
    /// Empty registry; see [`TeamRegistry::with_defaults`] for the stock roles.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry holding the forager, sentinel, and baseline reflex roles.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            RoleKind::Forager.name(),
            ReflexAgent::<Forager>::boxed::<S>,
        );
        registry.register(
            RoleKind::Sentinel.name(),
            ReflexAgent::<Sentinel>::boxed::<S>,
        );
        registry.register(
            RoleKind::Baseline.name(),
            ReflexAgent::<Baseline>::boxed::<S>,
        );
        registry
    }

    /// Register a factory under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: AgentFactory<S>) {
        self.factories.insert(name.into(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Check that every name resolves, reporting the first that does not.
    pub fn validate<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Result<()> {
        names
            .into_iter()
            .try_for_each(|name| self.factory(name).map(|_| ()))
    }

    /// Build a single agent playing `name`.
    pub fn build(&self, name: &str, setup: AgentSetup) -> Result<Box<dyn CaptureAgent<S>>> {
        let factory = self.factory(name)?;
        tracing::debug!("Building agent {} as {}", setup.index, name);
        Ok(factory(setup))
    }

    /// Build the two agents of one team.
    ///
    /// Both indices must belong to the same team and differ; both names must
    /// be registered. Nothing is built unless every check passes.
    pub fn create_team(
        &self,
        indices: [AgentIndex; 2],
        roles: [&str; 2],
        config: &AgentConfig,
        distances: Arc<dyn DistanceOracle>,
    ) -> Result<[Box<dyn CaptureAgent<S>>; 2]> {
        let [first, second] = indices;
        if first == second {
            return Err(RuntimeError::DuplicateAgent(second));
        }
        let team = Team::of(first);
        if Team::of(second) != team {
            return Err(RuntimeError::TeamMismatch {
                index: second,
                expected: team,
                actual: Team::of(second),
            });
        }
        self.validate(roles)?;

        let setup = |index| AgentSetup::new(index, config.clone(), Arc::clone(&distances));
        Ok([
            self.build(roles[0], setup(first))?,
            self.build(roles[1], setup(second))?,
        ])
    }

    fn factory(&self, name: &str) -> Result<AgentFactory<S>> {
        self.factories
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownRole {
                name: name.to_owned(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }
}

impl<S: StateView> Default for TeamRegistry<S> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

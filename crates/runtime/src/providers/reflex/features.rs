//! Named features, sparse feature vectors, and weight tables.
use std::collections::BTreeMap;
use std::fmt;

/// Every feature a role may emit.
///
/// The string form (`snake_case`) is what shows up in logs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    /// Team-relative score of the successor.
    SuccessorScore,
    /// Negated count of food still to collect.
    RemainingTargets,
    /// Negated count of capsules still to eat.
    CapsulePenalty,
    NearestTargetDistance,
    NearestCapsuleDistance,
    /// Capped distance to the nearest threatening ghost.
    ThreatDistance,
    ThreatClose,
    /// A close ghost and a dead end ahead.
    TrapDanger,
    Stopped,
    /// Still on the home half after the move.
    OnDefense,
    EnemiesNeutralized,
    InvaderDistance,
    /// Walking into a dead end with no invader in sight.
    EmptyCorridorDanger,
    Reversed,
}

/// Sparse mapping from [`Feature`] to value; absent features read as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureVector {
    values: BTreeMap<Feature, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.values.insert(feature, value);
    }

    /// Set a binary indicator.
    pub fn flag(&mut self, feature: Feature) {
        self.set(feature, 1.0);
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values.get(&feature).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.values.contains_key(&feature)
    }

    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.values.iter().map(|(&feature, &value)| (feature, value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of `value * weight` over the features present; a feature the
    /// table does not weigh contributes nothing.
    pub fn dot(&self, weights: &WeightTable) -> f64 {
        self.iter()
            .map(|(feature, value)| value * weights.get(feature))
            .sum()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (feature, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{feature}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Fixed per-role weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightTable {
    entries: &'static [(Feature, f64)],
}

impl WeightTable {
    pub const fn new(entries: &'static [(Feature, f64)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == feature)
            .map_or(0.0, |&(_, weight)| weight)
    }

    /// The features this table weighs: the role's vocabulary.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.entries.iter().map(|&(feature, _)| feature)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features().any(|candidate| candidate == feature)
    }
}

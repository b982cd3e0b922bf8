use std::env;

/// When a runner counts as over-committed late in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CarryRule {
    /// Carrying more than the magnitude of the current score deficit.
    #[default]
    ScoreDeficit,
    /// Carrying more than a fixed amount.
    Fixed(u32),
}

impl CarryRule {
    pub fn is_over_committed(self, carrying: u32, score: i32) -> bool {
        match self {
            CarryRule::ScoreDeficit => carrying > score.unsigned_abs(),
            CarryRule::Fixed(limit) => carrying > limit,
        }
    }
}

/// Tunable parameters of the reflex agents.
///
/// None of these are contracts: the defaults reproduce the tournament
/// agents, [`AgentConfig::legacy`] the earlier single-step generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Time left below which an unfavourable score triggers a retreat check.
    pub late_game_threshold: u32,
    /// Food left to collect at or below which every agent heads home.
    pub retreat_food_threshold: usize,
    /// Ghost distance above which a retreat step is always safe.
    pub retreat_safety_distance: u32,
    pub carry_rule: CarryRule,
    /// Dead-end horizon used by the forager when a ghost is close.
    pub forager_trap_horizon: u32,
    /// Dead-end horizon used by the sentinel when patrolling.
    pub sentinel_trap_horizon: u32,
    pub threat_distance_cap: u32,
    pub threat_close_distance: u32,
    pub capsule_distance_cap: u32,
    pub invader_distance_cap: u32,
    /// Seed for tie-breaking; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub const DEFAULT_LATE_GAME_THRESHOLD: u32 = 400;
    pub const DEFAULT_RETREAT_FOOD_THRESHOLD: usize = 2;
    pub const DEFAULT_RETREAT_SAFETY_DISTANCE: u32 = 2;
    pub const DEFAULT_FORAGER_TRAP_HORIZON: u32 = 20;
    pub const DEFAULT_SENTINEL_TRAP_HORIZON: u32 = 5;
    pub const DEFAULT_DISTANCE_CAP: u32 = 5;
    pub const DEFAULT_THREAT_CLOSE_DISTANCE: u32 = 3;

    pub fn new() -> Self {
        Self {
            late_game_threshold: Self::DEFAULT_LATE_GAME_THRESHOLD,
            retreat_food_threshold: Self::DEFAULT_RETREAT_FOOD_THRESHOLD,
            retreat_safety_distance: Self::DEFAULT_RETREAT_SAFETY_DISTANCE,
            carry_rule: CarryRule::ScoreDeficit,
            forager_trap_horizon: Self::DEFAULT_FORAGER_TRAP_HORIZON,
            sentinel_trap_horizon: Self::DEFAULT_SENTINEL_TRAP_HORIZON,
            threat_distance_cap: Self::DEFAULT_DISTANCE_CAP,
            threat_close_distance: Self::DEFAULT_THREAT_CLOSE_DISTANCE,
            capsule_distance_cap: Self::DEFAULT_DISTANCE_CAP,
            invader_distance_cap: Self::DEFAULT_DISTANCE_CAP,
            seed: None,
        }
    }

    /// The first agent generation: one-step corridor check, safety distance
    /// of 3 and a fixed carrying limit of 5.
    pub fn legacy() -> Self {
        Self {
            retreat_safety_distance: 3,
            carry_rule: CarryRule::Fixed(5),
            forager_trap_horizon: 1,
            sentinel_trap_horizon: 1,
            ..Self::new()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `CAPTURE_LATE_GAME_THRESHOLD`
    /// - `CAPTURE_RETREAT_FOOD`
    /// - `CAPTURE_SAFETY_DISTANCE`
    /// - `CAPTURE_CARRY_LIMIT` - switches to a fixed carrying limit
    /// - `CAPTURE_FORAGER_HORIZON`
    /// - `CAPTURE_SENTINEL_HORIZON`
    /// - `CAPTURE_SEED`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(value) = read_env("CAPTURE_LATE_GAME_THRESHOLD") {
            self.late_game_threshold = value;
        }
        if let Some(value) = read_env("CAPTURE_RETREAT_FOOD") {
            self.retreat_food_threshold = value;
        }
        if let Some(value) = read_env("CAPTURE_SAFETY_DISTANCE") {
            self.retreat_safety_distance = value;
        }
        if let Some(limit) = read_env("CAPTURE_CARRY_LIMIT") {
            self.carry_rule = CarryRule::Fixed(limit);
        }
        if let Some(value) = read_env("CAPTURE_FORAGER_HORIZON") {
            self.forager_trap_horizon = value;
        }
        if let Some(value) = read_env("CAPTURE_SENTINEL_HORIZON") {
            self.sentinel_trap_horizon = value;
        }
        if let Some(seed) = read_env("CAPTURE_SEED") {
            self.seed = Some(seed);
        }
        self
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::new().with_env_overrides()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_deficit_rule_compares_against_magnitude() {
        let rule = CarryRule::ScoreDeficit;
        assert!(rule.is_over_committed(4, -3));
        assert!(!rule.is_over_committed(3, -3));
        assert!(rule.is_over_committed(1, 0));
    }

    #[test]
    fn legacy_is_single_step() {
        let legacy = AgentConfig::legacy();
        assert_eq!(legacy.forager_trap_horizon, 1);
        assert_eq!(legacy.carry_rule, CarryRule::Fixed(5));
        assert_eq!(legacy.late_game_threshold, 400);
    }
}

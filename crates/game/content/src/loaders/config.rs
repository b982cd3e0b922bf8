//! Agent configuration loader.

use std::path::Path;

use capture_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so a file only needs the values it
    /// changes.
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use capture_core::CarryRule;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("late_game_threshold = 250\n").unwrap();
        assert_eq!(config.late_game_threshold, 250);
        assert_eq!(config.forager_trap_horizon, AgentConfig::DEFAULT_FORAGER_TRAP_HORIZON);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn carry_rule_accepts_both_forms() {
        let fixed = ConfigLoader::parse("carry_rule = { fixed = 5 }\n").unwrap();
        assert_eq!(fixed.carry_rule, CarryRule::Fixed(5));

        let deficit = ConfigLoader::parse("carry_rule = \"score_deficit\"\n").unwrap();
        assert_eq!(deficit.carry_rule, CarryRule::ScoreDeficit);
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(ConfigLoader::parse("late_game_threshold = \"soon\"\n").is_err());
    }
}

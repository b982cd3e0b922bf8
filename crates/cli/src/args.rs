//! Command-line arguments and configuration assembly.
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use capture_content::{ConfigLoader, ContentFactory, LayoutLoader};
use capture_core::{AgentConfig, Layout};
use clap::Parser;

/// Run a headless capture-the-flag match between reflex agents
#[derive(Debug, Parser)]
#[command(name = "capture")]
#[command(about = "Run a headless capture-the-flag match between reflex agents", long_about = None)]
#[command(version)]
pub struct Args {
    /// Layout file; defaults to the bundled `default_capture` layout
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Roles for red agents 0 and 2
    #[arg(long, default_value = "forager,sentinel")]
    pub red: TeamRoles,

    /// Roles for blue agents 1 and 3
    #[arg(long, default_value = "forager,sentinel")]
    pub blue: TeamRoles,

    /// TOML agent configuration; replaces the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start from the single-step retreat tuning instead of the defaults
    #[arg(long, conflicts_with = "config")]
    pub legacy: bool,

    /// Seed for tie-breaking; overrides CAPTURE_SEED and the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many moves even if the match is not over
    #[arg(long, default_value_t = 1200)]
    pub max_ticks: u32,
}

impl Args {
    pub fn load_layout(&self) -> Result<Layout> {
        match &self.layout {
            Some(path) => LayoutLoader::load(path),
            None => ContentFactory::bundled()
                .load_layout("default_capture")
                .context("Failed to load the bundled layout"),
        }
    }

    /// Defaults (or legacy tuning), then the TOML file, then `CAPTURE_*`
    /// environment overrides, then `--seed`.
    pub fn load_config(&self) -> Result<AgentConfig> {
        let base = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None if self.legacy => AgentConfig::legacy(),
            None => AgentConfig::default(),
        };
        let config = base.with_env_overrides();
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

/// Role names for one team's two agents, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRoles([String; 2]);

impl TeamRoles {
    pub fn names(&self) -> [&str; 2] {
        [self.0[0].as_str(), self.0[1].as_str()]
    }
}

impl FromStr for TeamRoles {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let names: Vec<&str> = s.split(',').map(str::trim).collect();
        match names.as_slice() {
            [first, second] if !first.is_empty() && !second.is_empty() => {
                Ok(Self([(*first).to_owned(), (*second).to_owned()]))
            }
            _ => Err(format!("expected two comma-separated roles, got '{s}'")),
        }
    }
}

impl fmt::Display for TeamRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_roles_need_exactly_two_names() {
        let roles: TeamRoles = "sentinel, forager".parse().unwrap();
        assert_eq!(roles.names(), ["sentinel", "forager"]);
        assert!("forager".parse::<TeamRoles>().is_err());
        assert!("forager,,sentinel".parse::<TeamRoles>().is_err());
        assert!("forager,".parse::<TeamRoles>().is_err());
    }

    #[test]
    fn defaults_parse() {
        let args = Args::try_parse_from(["capture"]).unwrap();
        assert_eq!(args.red.to_string(), "forager,sentinel");
        assert_eq!(args.max_ticks, 1200);
        assert!(args.layout.is_none());
    }

    #[test]
    fn legacy_and_config_are_exclusive() {
        let result = Args::try_parse_from(["capture", "--legacy", "--config", "agents.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn seed_flag_wins_over_everything() {
        let args = Args::try_parse_from(["capture", "--legacy", "--seed", "99"]).unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.retreat_safety_distance, AgentConfig::legacy().retreat_safety_distance);
    }
}

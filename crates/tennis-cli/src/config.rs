//! # CLI Configuration
//!
//! Optional YAML file passed with the global `--config` flag:
//!
//! ```yaml
//! precision: 4
//! players:
//!   - name: Sabalenka
//!     service_win_p: 0.599
//!     return_win_p: 0.448
//! ```
//!
//! Both keys are optional. A file that lists `players` replaces the built-in
//! roster rather than extending it. Probabilities are validated while
//! deserializing; the rest is checked by [`TennisConfig::validate`].

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tennis_core::Player;

use crate::roster::fold;

/// Decimal places used when no config says otherwise.
pub const DEFAULT_PRECISION: usize = 3;

/// Upper bound on `precision`; beyond this the solver's round-off shows.
pub const MAX_PRECISION: usize = 12;

/// Loaded configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TennisConfig {
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "builtin_roster")]
    pub players: Vec<Player>,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

const BUILTIN_ROSTER: [(&str, f64, f64); 2] =
    [("Sabalenka", 0.599, 0.448), ("Kyrgios", 0.69, 0.16)];

/// Players available without any config file.
pub fn builtin_roster() -> Vec<Player> {
    BUILTIN_ROSTER
        .iter()
        .filter_map(|&(name, serve, ret)| Player::new(name, serve, ret).ok())
        .collect()
}

impl Default for TennisConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            players: builtin_roster(),
        }
    }
}

impl TennisConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(source).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the commands cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail!(
                "precision {} exceeds the maximum of {MAX_PRECISION}",
                self.precision
            );
        }
        let mut seen = HashSet::new();
        for player in &self.players {
            let key = fold(player.name());
            if key.is_empty() {
                bail!("roster entry with an empty name");
            }
            if !seen.insert(key) {
                bail!("duplicate roster entry: {}", player.name().trim());
            }
        }
        Ok(())
    }
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<TennisConfig> {
    let Some(path) = path else {
        tracing::debug!("no config file, using built-in roster");
        return Ok(TennisConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = TennisConfig::from_yaml(&source)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        players = config.players.len(),
        precision = config.precision,
        "loaded config"
    );
    Ok(config)
}

//! # Report Subcommand
//!
//! Looks the player up in the roster and prints every level at once. A
//! player missing from the roster can still be reported on by passing both
//! point probabilities.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Args;
use tennis_core::{Player, ProviderError, StatsProvider};
use tennis_model::PlayerReport;

use crate::config::TennisConfig;
use crate::render::render_report;

/// Arguments for `tennis report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Player name, matched case-insensitively against the roster.
    #[arg(long)]
    pub player: String,

    /// Serve point probability, used when the player is not in the roster.
    #[arg(long, allow_hyphen_values = true)]
    pub serve: Option<f64>,

    /// Return point probability, used when the player is not in the roster.
    #[arg(long = "return", allow_hyphen_values = true)]
    pub return_p: Option<f64>,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Resolve the player from the roster, falling back to the manual
/// probabilities in `args`.
pub fn resolve_player(provider: &dyn StatsProvider, args: &ReportArgs) -> Result<Player> {
    match provider.lookup(&args.player) {
        Ok(player) => {
            if args.serve.is_some() || args.return_p.is_some() {
                tracing::warn!(
                    player = player.name(),
                    "player found in roster, ignoring --serve/--return"
                );
            }
            Ok(player)
        }
        Err(ProviderError::NotFound(name)) => match (args.serve, args.return_p) {
            (Some(serve), Some(return_p)) => {
                tracing::debug!(player = %name, "not in roster, using manual probabilities");
                Player::new(name, serve, return_p).context("invalid point probabilities")
            }
            _ => bail!(
                "{name} is not in the {} and needs both --serve and --return",
                provider.provider_name()
            ),
        },
        Err(e) => Err(e.into()),
    }
}

pub fn run_report(
    args: &ReportArgs,
    config: &TennisConfig,
    provider: &dyn StatsProvider,
    out: &mut dyn Write,
) -> Result<u8> {
    let player = resolve_player(provider, args)?;
    let report = PlayerReport::compute(&player)
        .with_context(|| format!("cannot model {}", player.name()))?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", render_report(&report, config.precision))?;
    }
    Ok(0)
}

//! # Game, Set and Match Subcommands
//!
//! Each builds the models for a manual pair of point probabilities and
//! prints the win probability at its level, optionally from a mid-play
//! score given with `--from`.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use tennis_chain::ChainState;
use tennis_core::Player;
use tennis_model::{GameModel, MatchModel, MatchScore, PointScore, SetModel, SetScore};

use crate::config::TennisConfig;
use crate::render::render_rows;

/// Name given to players built from command-line probabilities.
pub const MANUAL_PLAYER: &str = "manual";

/// Point probabilities supplied on the command line.
#[derive(Args, Debug, Clone)]
pub struct PointArgs {
    /// Probability of winning a point on serve.
    #[arg(long, allow_hyphen_values = true)]
    pub serve: f64,

    /// Probability of winning a point on return.
    #[arg(long = "return", allow_hyphen_values = true)]
    pub return_p: f64,
}

impl PointArgs {
    /// Validate both probabilities into a player.
    pub fn player(&self) -> Result<Player> {
        Player::new(MANUAL_PLAYER, self.serve, self.return_p)
            .context("invalid point probabilities")
    }
}

/// Arguments for `tennis game`.
#[derive(Args, Debug)]
pub struct GameArgs {
    #[command(flatten)]
    pub points: PointArgs,

    /// Point score to start from, e.g. "30-40" or "Deuce".
    #[arg(long)]
    pub from: Option<String>,
}

/// Arguments for `tennis set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub points: PointArgs,

    /// Game score to start from, e.g. "5-5" or "6-5".
    #[arg(long)]
    pub from: Option<String>,
}

/// Arguments for `tennis match`.
#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub points: PointArgs,

    /// Set score to start from, e.g. "1-1".
    #[arg(long)]
    pub from: Option<String>,
}

/// Hold and break probabilities with expected game lengths.
pub fn run_game(args: &GameArgs, config: &TennisConfig, out: &mut dyn Write) -> Result<u8> {
    let player = args.points.player()?;
    let start = args.from.as_deref().unwrap_or(PointScore::START.label());
    let model = GameModel::new(&player)?;
    let rows = [
        ("hold serve", model.server_win_probability(start)?),
        ("break serve", model.returner_win_probability(start)?),
        ("points left serving", model.expected_points_serving(start)?),
        ("points left returning", model.expected_points_returning(start)?),
    ];
    writeln!(out, "game from {start}")?;
    write!(out, "{}", render_rows(&rows, config.precision))?;
    Ok(0)
}

/// Set win probability and expected games.
pub fn run_set(args: &SetArgs, config: &TennisConfig, out: &mut dyn Write) -> Result<u8> {
    let player = args.points.player()?;
    let start = args.from.as_deref().unwrap_or(SetScore::START.label());
    let model = SetModel::new(&player)?;
    let rows = [
        ("set win", model.set_win_probability(start)?),
        ("games left", model.expected_games(start)?),
    ];
    writeln!(out, "set from {start}")?;
    write!(out, "{}", render_rows(&rows, config.precision))?;
    Ok(0)
}

/// Match win probability and expected sets.
pub fn run_match(args: &MatchArgs, config: &TennisConfig, out: &mut dyn Write) -> Result<u8> {
    let player = args.points.player()?;
    let start = args.from.as_deref().unwrap_or(MatchScore::START.label());
    let model = MatchModel::new(&player)?;
    let rows = [
        ("match win", model.match_win_probability(start)?),
        ("sets left", model.expected_sets(start)?),
    ];
    writeln!(out, "match from {start}")?;
    write!(out, "{}", render_rows(&rows, config.precision))?;
    Ok(0)
}

//! # Matrix Subcommand
//!
//! Prints the transition matrix of one level as a labelled table. The game
//! level has two matrices, one per serving role, and prints both.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tennis_model::{GameModel, MatchModel, SetModel};

use crate::config::TennisConfig;
use crate::levels::PointArgs;
use crate::render::render_matrix;

/// Which chain to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Game,
    Set,
    Match,
}

/// Arguments for `tennis matrix`.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Level whose matrix to print.
    #[arg(long, value_enum)]
    pub level: Level,

    #[command(flatten)]
    pub points: PointArgs,

    /// Colour entries by side of one half and shade alternate rows.
    #[arg(long)]
    pub color: bool,
}

pub fn run_matrix(args: &MatrixArgs, config: &TennisConfig, out: &mut dyn Write) -> Result<u8> {
    let player = args.points.player()?;
    let precision = config.precision;
    let color = args.color;
    match args.level {
        Level::Game => {
            let model = GameModel::new(&player)?;
            writeln!(out, "serving (w = {:.precision$})", player.service_win_p())?;
            write!(out, "{}", render_matrix(model.matrix_server(), precision, color))?;
            writeln!(out)?;
            writeln!(out, "returning (w = {:.precision$})", player.return_win_p())?;
            write!(out, "{}", render_matrix(model.matrix_returner(), precision, color))?;
        }
        Level::Set => {
            let model = SetModel::new(&player)?;
            writeln!(
                out,
                "set (hold = {:.precision$}, break = {:.precision$})",
                model.server_game_win_p(),
                model.returner_game_win_p()
            )?;
            write!(out, "{}", render_matrix(model.matrix(), precision, color))?;
        }
        Level::Match => {
            let model = MatchModel::new(&player)?;
            writeln!(out, "match (set = {:.precision$})", model.set_win_p())?;
            write!(out, "{}", render_matrix(model.matrix(), precision, color))?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: Level) -> String {
        run_with_colour(level, false)
    }

    fn run_with_colour(level: Level, color: bool) -> String {
        let args = MatrixArgs {
            level,
            color,
            points: PointArgs {
                serve: 0.6,
                return_p: 0.4,
            },
        };
        let mut buf = Vec::new();
        run_matrix(&args, &TennisConfig::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_game_prints_both_roles() {
        let text = run(Level::Game);
        assert!(text.starts_with("serving (w = 0.600)\n"));
        assert!(text.contains("\nreturning (w = 0.400)\n"));
        // Header plus 20 rows, twice, plus two titles and a blank line.
        assert_eq!(text.lines().count(), 2 * 21 + 3);
    }

    #[test]
    fn test_set_has_forty_rows() {
        let text = run(Level::Set);
        assert_eq!(text.lines().count(), 1 + 1 + 40);
        assert!(text.lines().any(|l| l.starts_with("6-5 ")));
    }

    #[test]
    fn test_match_title_shows_set_probability() {
        let text = run(Level::Match);
        assert!(text.starts_with("match (set = 0.500)\n"), "{text}");
    }

    #[test]
    fn test_colour_flag_reaches_renderer() {
        assert!(!run(Level::Set).contains('\x1b'));
        let text = run_with_colour(Level::Set, true);
        assert!(text.contains("\x1b[100m"));
        assert_eq!(text.lines().count(), 1 + 1 + 40);
    }
}

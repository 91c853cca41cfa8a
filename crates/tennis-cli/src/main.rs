//! # tennis CLI entry point
//!
//! Parses command-line arguments, loads the configuration, and dispatches
//! to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tennis_cli::config::load_config;
use tennis_cli::levels::{run_game, run_match, run_set, GameArgs, MatchArgs, SetArgs};
use tennis_cli::matrix::{run_matrix, MatrixArgs};
use tennis_cli::repl::run_repl;
use tennis_cli::report::{run_report, ReportArgs};
use tennis_cli::roster::RosterProvider;

/// Tennis win probabilities from absorbing Markov chains.
///
/// Derives game, set and best-of-three match win probabilities from a
/// player's chance of winning a point on serve and on return.
#[derive(Parser, Debug)]
#[command(name = "tennis", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Probabilities of holding and breaking serve.
    Game(GameArgs),

    /// Probability of winning a set without tie-break.
    Set(SetArgs),

    /// Probability of winning a best-of-three match.
    Match(MatchArgs),

    /// Full report for a roster player.
    Report(ReportArgs),

    /// Print the transition matrix of one level.
    Matrix(MatrixArgs),

    /// Interactive player lookup.
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("tennis CLI starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config = load_config(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Game(args) => run_game(&args, &config, &mut out)?,
        Commands::Set(args) => run_set(&args, &config, &mut out)?,
        Commands::Match(args) => run_match(&args, &config, &mut out)?,
        Commands::Report(args) => {
            let roster = RosterProvider::new(config.players.clone());
            run_report(&args, &config, &roster, &mut out)?
        }
        Commands::Matrix(args) => run_matrix(&args, &config, &mut out)?,
        Commands::Repl => {
            let roster = RosterProvider::new(config.players.clone());
            let stdin = std::io::stdin();
            run_repl(&roster, config.precision, stdin.lock(), &mut out)?;
            0
        }
    };
    out.flush()?;
    Ok(code)
}

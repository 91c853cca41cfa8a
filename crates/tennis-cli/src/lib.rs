//! # tennis-cli — Command-Line Interface
//!
//! Thin front end over `tennis-model`. Every handler takes its parsed
//! arguments, the loaded [`config::TennisConfig`] and an output sink, and
//! returns an exit code, so handlers are testable without a terminal.
//!
//! ## Subcommands
//!
//! - `game`: hold and break probabilities for manual point probabilities
//! - `set`: set win probability, optionally from a mid-set score
//! - `match`: best-of-three match win probability
//! - `report`: every level for a roster player, as text or JSON
//! - `matrix`: the transition matrix of one level
//! - `repl`: interactive player lookup with manual fallback
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; modelling lives in the library crates.
//! - Errors are `anyhow` with context; `main` logs them and exits non-zero.

pub mod config;
pub mod levels;
pub mod matrix;
pub mod render;
pub mod repl;
pub mod report;
pub mod roster;

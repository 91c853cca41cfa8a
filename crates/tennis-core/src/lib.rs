//! # tennis-core — Foundational Types
//!
//! This crate is the leaf of the workspace. It defines the values every
//! scoring level consumes: the validated [`Probability`] newtype, the
//! immutable [`Player`] record, and the error types for invalid inputs and
//! unknown scoring-state labels. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **No bare `f64` probabilities at the boundary.** Every per-point or
//!    per-game probability entering the models is a `Probability`, which is
//!    rejected at construction when it is outside `[0, 1]` or not finite.
//!
//! 2. **Players are values.** A `Player` is built once and never mutated.
//!    Recomputing with different numbers means building a new `Player`.
//!
//! 3. **The stats source is a seam, not a dependency.** [`StatsProvider`] is
//!    the only contract the core has with whatever fetches player statistics.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tennis-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod player;
pub mod probability;
pub mod provider;

// Re-export primary types for ergonomic imports.
pub use error::{ProbabilityError, ProviderError, UnknownStateError};
pub use player::Player;
pub use probability::Probability;
pub use provider::StatsProvider;

//! # tennis-chain — Absorbing Markov Chains
//!
//! Every level of tennis scoring (game, set, match) is a discrete-time
//! absorbing Markov chain whose last two states are `Win` and `Lose`. This
//! crate provides the three pieces those levels share:
//!
//! - **State spaces** (`state.rs`): the [`ChainState`] trait, a bijection
//!   between a typed scoring state, its matrix index, and its label.
//!
//! - **Transition matrices** (`matrix.rs`): [`TransitionMatrix`], a
//!   fixed-size `nalgebra::SMatrix` that is validated as row-stochastic with
//!   identity rows for the two absorbing states. It can only be produced by
//!   [`TransitionBuilder`], which writes each transient row as a
//!   won/lost branch pair.
//!
//! - **Absorption solver** (`absorbing.rs`): [`Absorption`], the
//!   fundamental matrix `N = (I − Q)⁻¹`, the absorption probabilities
//!   `B = N·R`, and the expected number of steps to absorption.
//!
//! - **Solved chains** (`chain.rs`): [`AbsorbingChain`], a matrix paired
//!   with its solution and queried by state label.
//!
//! ## Design
//!
//! The level types do not share an interface beyond [`ChainState`]: game,
//! set and match differ in topology and size, so each builds its own matrix
//! and only the solver is common.

pub mod absorbing;
pub mod chain;
pub mod error;
pub mod matrix;
pub mod state;

pub use absorbing::Absorption;
pub use chain::AbsorbingChain;
pub use error::ChainError;
pub use matrix::{TransitionBuilder, TransitionMatrix, ROW_SUM_TOLERANCE};
pub use state::ChainState;

#[cfg(test)]
mod test_support;

//! # Scoring State Spaces
//!
//! A [`ChainState`] is a scoring state of one level with a fixed position in
//! that level's transition matrix. The ordering is part of the type: the
//! index, the label and the typed state must agree everywhere a matrix is
//! built or queried.
//!
//! ## Convention
//!
//! The last two states are always absorbing, in the order `Win`, `Lose`.

use std::fmt;

use tennis_core::UnknownStateError;

/// A state of an absorbing scoring chain.
pub trait ChainState: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Name of the scoring level (`game`, `set`, `match`), used in errors.
    const LEVEL: &'static str;

    /// The absorbing win state. Must be at index `len - 2`.
    const WIN: Self;

    /// The absorbing lose state. Must be at index `len - 1`.
    const LOSE: Self;

    /// The initial, unplayed state (`0-0`).
    const START: Self;

    /// Every state, in matrix order.
    fn all() -> &'static [Self];

    /// Position of this state in the matrix.
    fn index(self) -> usize;

    /// Human-readable label, unique within the level.
    fn label(self) -> &'static str;

    /// Number of states at this level.
    fn count() -> usize {
        Self::all().len()
    }

    /// The state at `index`, if any.
    fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Resolve a label to its state.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] if no state of this level carries
    /// `label`.
    fn from_label(label: &str) -> Result<Self, UnknownStateError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.label() == label)
            .ok_or_else(|| UnknownStateError::new(Self::LEVEL, label))
    }

    /// Whether this is `Win` or `Lose`.
    fn is_absorbing(self) -> bool {
        self == Self::WIN || self == Self::LOSE
    }

    /// All labels, in matrix order.
    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.label()).collect()
    }
}

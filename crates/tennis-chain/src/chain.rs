//! # Solved Chains
//!
//! An [`AbsorbingChain`] owns a validated transition matrix together with
//! its solved [`Absorption`]. Both are computed once and never change, so a
//! chain can be queried from any number of threads without locking.

use tennis_core::UnknownStateError;

use crate::absorbing::Absorption;
use crate::error::ChainError;
use crate::matrix::TransitionMatrix;
use crate::state::ChainState;

/// A transition matrix and its absorption solution.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsorbingChain<S: ChainState, const N: usize> {
    matrix: TransitionMatrix<S, N>,
    absorption: Absorption<S>,
}

impl<S: ChainState, const N: usize> AbsorbingChain<S, N> {
    /// Solve `matrix` and keep both.
    ///
    /// # Errors
    ///
    /// Propagates [`Absorption::solve`] failures.
    pub fn solve(matrix: TransitionMatrix<S, N>) -> Result<Self, ChainError> {
        let absorption = Absorption::solve(&matrix)?;
        Ok(Self { matrix, absorption })
    }

    /// The transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix<S, N> {
        &self.matrix
    }

    /// The absorption solution.
    pub fn absorption(&self) -> &Absorption<S> {
        &self.absorption
    }

    /// Probability of reaching `Win` from `start`.
    pub fn win_probability(&self, start: S) -> f64 {
        self.absorption.win_probability(start)
    }

    /// Probability of reaching `Win` from the state labelled `label`.
    ///
    /// # Errors
    ///
    /// [`UnknownStateError`] if `label` is not a state of this level.
    pub fn win_probability_from(&self, label: &str) -> Result<f64, UnknownStateError> {
        Ok(self.win_probability(S::from_label(label)?))
    }

    /// Expected steps to absorption from `start`.
    pub fn expected_steps(&self, start: S) -> f64 {
        self.absorption.expected_steps(start)
    }

    /// Expected steps to absorption from the state labelled `label`.
    ///
    /// # Errors
    ///
    /// [`UnknownStateError`] if `label` is not a state of this level.
    pub fn expected_steps_from(&self, label: &str) -> Result<f64, UnknownStateError> {
        Ok(self.expected_steps(S::from_label(label)?))
    }
}

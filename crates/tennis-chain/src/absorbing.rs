//! # Absorption Solver
//!
//! Solves an absorbing chain in closed form.
//!
//! With the transient states first and `Win`, `Lose` last, the matrix
//! partitions as
//!
//! ```text
//!     ┌ Q  R ┐     Q: transient → transient   (t × t)
//! P = │      │     R: transient → absorbing   (t × 2)
//!     └ 0  I ┘
//! ```
//!
//! The fundamental matrix `N = (I − Q)⁻¹` holds in `N[i, j]` the expected
//! number of visits to transient state `j` starting from `i`. The absorption
//! probabilities are `B = N·R`; column 0 is `Win`, column 1 is `Lose`. The
//! row sums of `N` are the expected number of steps before absorption.
//!
//! ## Degenerate chains
//!
//! `I − Q` is invertible exactly when every transient state has a path of
//! positive-probability edges into `Win` or `Lose`. That condition is
//! checked structurally before the LU decomposition, so an input such as a
//! server who wins every point paired with a returner who wins none is
//! reported as [`ChainError::DegenerateChain`] naming the stuck state.

use std::marker::PhantomData;

use nalgebra::DMatrix;

use crate::error::ChainError;
use crate::matrix::TransitionMatrix;
use crate::state::ChainState;

/// The solved absorption structure of one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Absorption<S: ChainState> {
    /// `N = (I − Q)⁻¹`.
    fundamental: DMatrix<f64>,
    /// `B = N·R`.
    absorption: DMatrix<f64>,
    _states: PhantomData<S>,
}

impl<S: ChainState> Absorption<S> {
    /// Solve `matrix`.
    ///
    /// # Errors
    ///
    /// - [`ChainError::DegenerateChain`] if a transient state cannot reach
    ///   absorption.
    /// - [`ChainError::Singular`] if the LU decomposition still finds
    ///   `I − Q` singular.
    pub fn solve<const N: usize>(matrix: &TransitionMatrix<S, N>) -> Result<Self, ChainError> {
        check_reaches_absorption(matrix)?;

        let t = N - 2;
        let m = matrix.as_matrix();
        let q = DMatrix::from_fn(t, t, |i, j| m[(i, j)]);
        let r = DMatrix::from_fn(t, 2, |i, j| m[(i, t + j)]);

        let fundamental = (DMatrix::<f64>::identity(t, t) - q)
            .lu()
            .try_inverse()
            .ok_or(ChainError::Singular)?;
        let absorption = &fundamental * &r;

        tracing::trace!(chain = S::LEVEL, transient = t, "solved absorbing chain");

        Ok(Self {
            fundamental,
            absorption,
            _states: PhantomData,
        })
    }

    /// Probability of eventually reaching `Win` from `start`.
    ///
    /// An absorbing start is already decided: 1 for `Win`, 0 for `Lose`.
    pub fn win_probability(&self, start: S) -> f64 {
        if start == S::WIN {
            1.0
        } else if start == S::LOSE {
            0.0
        } else {
            self.absorption[(start.index(), 0)]
        }
    }

    /// Probability of eventually reaching `Lose` from `start`.
    pub fn lose_probability(&self, start: S) -> f64 {
        if start == S::WIN {
            0.0
        } else if start == S::LOSE {
            1.0
        } else {
            self.absorption[(start.index(), 1)]
        }
    }

    /// [`win_probability`](Self::win_probability) by raw matrix index.
    ///
    /// # Errors
    ///
    /// [`ChainError::StartIndexOutOfRange`] if `index` is not a state.
    pub fn win_probability_at(&self, index: usize) -> Result<f64, ChainError> {
        S::from_index(index)
            .map(|s| self.win_probability(s))
            .ok_or(ChainError::StartIndexOutOfRange {
                index,
                size: S::count(),
            })
    }

    /// Expected number of steps (points, games, sets) before the chain is
    /// absorbed, starting from `start`. Zero for absorbing states.
    pub fn expected_steps(&self, start: S) -> f64 {
        if start.is_absorbing() {
            0.0
        } else {
            self.fundamental.row(start.index()).sum()
        }
    }

    /// Expected number of visits to transient state `to` starting from
    /// `from`, counting the start itself. `None` if either is absorbing.
    pub fn expected_visits(&self, from: S, to: S) -> Option<f64> {
        if from.is_absorbing() || to.is_absorbing() {
            None
        } else {
            Some(self.fundamental[(from.index(), to.index())])
        }
    }
}

/// Verify that every transient state has a positive-probability path into
/// an absorbing state.
fn check_reaches_absorption<S: ChainState, const N: usize>(
    matrix: &TransitionMatrix<S, N>,
) -> Result<(), ChainError> {
    let states = S::all();
    let mut reaches = [false; N];
    reaches[N - 2] = true;
    reaches[N - 1] = true;

    // Backward closure: fixed point of "has an edge into a reaching state".
    let mut changed = true;
    while changed {
        changed = false;
        for from in states.iter().copied() {
            if reaches[from.index()] {
                continue;
            }
            let hits = states
                .iter()
                .any(|to| reaches[to.index()] && matrix.get(from, *to) > 0.0);
            if hits {
                reaches[from.index()] = true;
                changed = true;
            }
        }
    }

    match states.iter().find(|s| !reaches[s.index()]) {
        Some(stuck) => {
            tracing::warn!(
                chain = S::LEVEL,
                state = stuck.label(),
                "transient state cannot reach absorption"
            );
            Err(ChainError::DegenerateChain {
                state: stuck.label(),
            })
        }
        None => Ok(()),
    }
}

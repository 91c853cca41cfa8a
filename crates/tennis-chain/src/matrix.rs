//! # Transition Matrices
//!
//! A [`TransitionMatrix`] is a square, non-negative, row-stochastic matrix of
//! fixed size `N`, indexed by the states of a [`ChainState`] type. The last
//! two rows are the absorbing identity rows for `Win` and `Lose`.
//!
//! ## Invariants
//!
//! Enforced by [`TransitionBuilder::build`], the only way to obtain a
//! matrix:
//!
//! - every entry is finite and `>= 0`;
//! - every transient row sums to 1 within [`ROW_SUM_TOLERANCE`];
//! - the `Win` and `Lose` rows are exact identity rows.
//!
//! Once built, a matrix is immutable.

use std::marker::PhantomData;

use nalgebra::SMatrix;
use tennis_core::Probability;

use crate::error::ChainError;
use crate::state::ChainState;

/// Maximum deviation of a transient row sum from 1.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// A validated row-stochastic transition matrix over the states `S`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix<S: ChainState, const N: usize> {
    inner: SMatrix<f64, N, N>,
    _states: PhantomData<S>,
}

impl<S: ChainState, const N: usize> TransitionMatrix<S, N> {
    /// Probability of moving from `from` to `to` in one step.
    pub fn get(&self, from: S, to: S) -> f64 {
        self.inner[(from.index(), to.index())]
    }

    /// Entry by raw index.
    pub fn entry(&self, row: usize, col: usize) -> Option<f64> {
        if row < N && col < N {
            Some(self.inner[(row, col)])
        } else {
            None
        }
    }

    /// Sum of the row for `from`.
    pub fn row_sum(&self, from: S) -> f64 {
        self.inner.row(from.index()).sum()
    }

    /// The states reachable from `from` in one step, with their probabilities,
    /// in matrix order. Zero-probability entries are omitted.
    pub fn successors(&self, from: S) -> Vec<(S, f64)> {
        S::all()
            .iter()
            .copied()
            .map(|to| (to, self.get(from, to)))
            .filter(|(_, p)| *p > 0.0)
            .collect()
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        N
    }

    /// State labels in matrix order.
    pub fn labels(&self) -> Vec<&'static str> {
        S::labels()
    }

    /// The underlying fixed-size matrix.
    pub fn as_matrix(&self) -> &SMatrix<f64, N, N> {
        &self.inner
    }
}

/// Writes a transition matrix row by row, then validates it.
///
/// The absorbing rows are filled in at construction. Each transient row is
/// normally written with a single [`branch`](Self::branch) call: one won
/// target and one lost target whose probabilities sum to one.
#[derive(Debug, Clone)]
pub struct TransitionBuilder<S: ChainState, const N: usize> {
    inner: SMatrix<f64, N, N>,
    _states: PhantomData<S>,
}

impl<S: ChainState, const N: usize> TransitionBuilder<S, N> {
    /// Start a matrix with the `Win`/`Lose` identity rows in place.
    ///
    /// # Errors
    ///
    /// - [`ChainError::StateCountMismatch`] if `S` does not have exactly `N`
    ///   states.
    /// - [`ChainError::AbsorbingRowNotIdentity`] if `Win`/`Lose` are not the
    ///   last two states.
    pub fn new() -> Result<Self, ChainError> {
        if S::count() != N {
            return Err(ChainError::StateCountMismatch {
                level: S::LEVEL,
                states: S::count(),
                size: N,
            });
        }
        if N < 2 || S::WIN.index() != N - 2 {
            return Err(ChainError::AbsorbingRowNotIdentity {
                state: S::WIN.label(),
            });
        }
        if S::LOSE.index() != N - 1 {
            return Err(ChainError::AbsorbingRowNotIdentity {
                state: S::LOSE.label(),
            });
        }
        let mut inner = SMatrix::<f64, N, N>::zeros();
        inner[(N - 2, N - 2)] = 1.0;
        inner[(N - 1, N - 1)] = 1.0;
        Ok(Self {
            inner,
            _states: PhantomData,
        })
    }

    /// Write the row for `from`: `won` with probability `p_win`, `lost` with
    /// `1 - p_win`. Entries accumulate, so a row may be written in parts.
    pub fn branch(&mut self, from: S, won: S, lost: S, p_win: Probability) -> &mut Self {
        let row = from.index();
        self.inner[(row, won.index())] += p_win.value();
        self.inner[(row, lost.index())] += p_win.complement().value();
        self
    }

    /// Overwrite a single entry.
    pub fn set(&mut self, from: S, to: S, value: f64) -> &mut Self {
        self.inner[(from.index(), to.index())] = value;
        self
    }

    /// Validate and freeze the matrix.
    ///
    /// # Errors
    ///
    /// [`ChainError::InvalidEntry`], [`ChainError::RowNotStochastic`] or
    /// [`ChainError::AbsorbingRowNotIdentity`] on the first violation found,
    /// scanning rows in matrix order.
    pub fn build(self) -> Result<TransitionMatrix<S, N>, ChainError> {
        for from in S::all().iter().copied() {
            let row = from.index();
            for to in S::all().iter().copied() {
                let value = self.inner[(row, to.index())];
                if !value.is_finite() || value < 0.0 {
                    return Err(ChainError::InvalidEntry {
                        from: from.label(),
                        to: to.label(),
                        value,
                    });
                }
            }

            if from.is_absorbing() {
                let identity = S::all().iter().copied().all(|to| {
                    let expected = if to == from { 1.0 } else { 0.0 };
                    self.inner[(row, to.index())] == expected
                });
                if !identity {
                    return Err(ChainError::AbsorbingRowNotIdentity {
                        state: from.label(),
                    });
                }
                continue;
            }

            let sum = self.inner.row(row).sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(ChainError::RowNotStochastic {
                    state: from.label(),
                    sum,
                });
            }
        }

        Ok(TransitionMatrix {
            inner: self.inner,
            _states: PhantomData,
        })
    }
}

//! Errors raised while building or solving an absorbing chain.

use thiserror::Error;

/// A transition matrix failed validation, or its chain cannot be solved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    /// The state type and the matrix disagree on the number of states.
    #[error("{level} state space has {states} states but the matrix is {size}x{size}")]
    StateCountMismatch {
        /// Scoring level.
        level: &'static str,
        /// Number of states the state type declares.
        states: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A transition probability is negative or not finite.
    #[error("invalid transition probability {value} from {from} to {to}")]
    InvalidEntry {
        /// Source state label.
        from: &'static str,
        /// Target state label.
        to: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A row does not sum to one.
    #[error("row {state} sums to {sum}, expected 1")]
    RowNotStochastic {
        /// State label of the row.
        state: &'static str,
        /// The actual row sum.
        sum: f64,
    },

    /// One of the two absorbing rows is not an identity row.
    #[error("absorbing state {state} must transition to itself with probability 1")]
    AbsorbingRowNotIdentity {
        /// State label of the row.
        state: &'static str,
    },

    /// A start index lies outside the state space.
    #[error("start index {index} out of range for {size} states")]
    StartIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of states.
        size: usize,
    },

    /// A transient state can never reach `Win` or `Lose`, so `I − Q` is
    /// singular.
    #[error("degenerate chain: state {state} never reaches an absorbing state")]
    DegenerateChain {
        /// The first transient state found with no path to absorption.
        state: &'static str,
    },

    /// LU decomposition reported `I − Q` as singular.
    #[error("degenerate chain: I - Q is singular")]
    Singular,
}

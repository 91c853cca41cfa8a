//! Errors surfaced by the scoring models.

use tennis_chain::ChainError;
use tennis_core::{ProbabilityError, UnknownStateError};
use thiserror::Error;

/// Failure to build or query a scoring model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A probability input (or a probability passed up from a lower level)
    /// was rejected.
    #[error(transparent)]
    InvalidProbability(#[from] ProbabilityError),

    /// A start-state label did not resolve.
    #[error(transparent)]
    UnknownState(#[from] UnknownStateError),

    /// The transition matrix was invalid or its chain degenerate.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

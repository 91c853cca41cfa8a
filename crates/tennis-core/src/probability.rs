//! # Probability Newtype
//!
//! A validated `f64` in the closed interval `[0, 1]`.
//!
//! ## Invariant
//!
//! A `Probability` is always finite and within `[0, 1]`. The endpoints are
//! accepted: a server who never loses a point is a legal (if extreme)
//! input, and the chain solver decides whether the resulting chain is still
//! well posed.
//!
//! Deserialization goes through the same validation as [`Probability::new`],
//! so a roster file cannot smuggle `1.2` into a model.

use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;

/// Tolerance used when re-validating probabilities produced by a solver,
/// where round-off can land a hair outside `[0, 1]`.
pub const SOLVER_TOLERANCE: f64 = 1e-9;

/// A probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Certain loss.
    pub const ZERO: Self = Self(0.0);
    /// Certain win.
    pub const ONE: Self = Self(1.0);
    /// A fair coin.
    pub const HALF: Self = Self(0.5);

    /// Validate `value` as the input named `field`.
    ///
    /// # Errors
    ///
    /// - [`ProbabilityError::NotFinite`] for NaN or infinities.
    /// - [`ProbabilityError::OutOfRange`] for values outside `[0, 1]`.
    pub fn new(field: &'static str, value: f64) -> Result<Self, ProbabilityError> {
        if !value.is_finite() {
            return Err(ProbabilityError::NotFinite { field, value });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::OutOfRange { field, value });
        }
        Ok(Self(value))
    }

    /// Validate a probability computed by a solver.
    ///
    /// Values within [`SOLVER_TOLERANCE`] of the interval are clamped onto
    /// it; anything further out is still an error.
    pub fn from_solved(field: &'static str, value: f64) -> Result<Self, ProbabilityError> {
        if value.is_finite()
            && value >= -SOLVER_TOLERANCE
            && value <= 1.0 + SOLVER_TOLERANCE
        {
            return Ok(Self(value.clamp(0.0, 1.0)));
        }
        Self::new(field, value)
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// `1 - p`.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = ProbabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("probability", value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

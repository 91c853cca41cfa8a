//! # Player
//!
//! The single source of truth for every downstream computation: a name and
//! two per-point probabilities.
//!
//! A `Player` is immutable. Its fields are private and only exposed through
//! accessors, so a model built from a player can never observe it change.

use serde::{Deserialize, Serialize};

use crate::error::ProbabilityError;
use crate::probability::Probability;

/// A player's per-point win probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    /// P(win point | serving).
    service_win_p: Probability,
    /// P(win point | returning).
    return_win_p: Probability,
}

impl Player {
    /// Build a player from raw probabilities, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityError`] naming the first rejected field.
    pub fn new(
        name: impl Into<String>,
        service_win_p: f64,
        return_win_p: f64,
    ) -> Result<Self, ProbabilityError> {
        Ok(Self {
            name: name.into(),
            service_win_p: Probability::new("service_win_p", service_win_p)?,
            return_win_p: Probability::new("return_win_p", return_win_p)?,
        })
    }

    /// Build a player from already-validated probabilities.
    pub fn from_probabilities(
        name: impl Into<String>,
        service_win_p: Probability,
        return_win_p: Probability,
    ) -> Self {
        Self {
            name: name.into(),
            service_win_p,
            return_win_p,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probability of winning a point on serve.
    pub fn service_win_p(&self) -> Probability {
        self.service_win_p
    }

    /// Probability of winning a point on return.
    pub fn return_win_p(&self) -> Probability {
        self.return_win_p
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (serve {:.3}, return {:.3})",
            self.name, self.service_win_p, self.return_win_p
        )
    }
}

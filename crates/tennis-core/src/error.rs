//! # Error Types
//!
//! Input-side errors shared by every scoring level. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Probability errors carry the offending field and value.
//! - Lookup errors carry the scoring level and the label that failed to
//!   resolve, so a caller can report exactly what was typed.
//! - Provider errors distinguish "no such player" from "found, but the
//!   numbers were unusable" so the caller can fall back to manual input.

use thiserror::Error;

/// A probability input was rejected before any matrix was built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbabilityError {
    /// The value lies outside the closed interval `[0, 1]`.
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfRange {
        /// Which input was rejected (e.g. `service_win_p`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// A scoring-state label did not match any state of the given level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {level} state: {label:?}")]
pub struct UnknownStateError {
    /// The scoring level that was searched (`game`, `set`, `match`).
    pub level: &'static str,
    /// The label that failed to resolve.
    pub label: String,
}

impl UnknownStateError {
    /// Build a lookup error for `label` at `level`.
    pub fn new(level: &'static str, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }
}

/// Failure of a [`crate::StatsProvider`] lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider has no record for this player.
    #[error("player not found: {0}")]
    NotFound(String),

    /// A record exists but its statistics could not be turned into a `Player`.
    #[error("could not parse statistics for {name}: {reason}")]
    Parse {
        /// The player whose record was unusable.
        name: String,
        /// Why the record was rejected.
        reason: String,
    },
}

impl From<(String, ProbabilityError)> for ProviderError {
    fn from((name, err): (String, ProbabilityError)) -> Self {
        Self::Parse {
            name,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_error_display_names_field() {
        let err = ProbabilityError::OutOfRange {
            field: "service_win_p",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "service_win_p must lie in [0, 1], got 1.5");
    }

    #[test]
    fn test_unknown_state_display() {
        let err = UnknownStateError::new("game", "50-0");
        assert_eq!(err.to_string(), "unknown game state: \"50-0\"");
    }

    #[test]
    fn test_provider_parse_from_probability_error() {
        let err: ProviderError = (
            "Nobody".to_string(),
            ProbabilityError::NotFinite {
                field: "return_win_p",
                value: f64::NAN,
            },
        )
            .into();
        match err {
            ProviderError::Parse { name, reason } => {
                assert_eq!(name, "Nobody");
                assert!(reason.contains("return_win_p"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}

//! # Match Model
//!
//! Best of three sets as a 6-state absorbing chain.
//!
//! ```text
//! 0-0 ─won─▶ 1-0 ─won─▶ Win
//!  │          └─lost─▶ 1-1 ─won─▶ Win
//!  └─lost─▶ 0-1 ─won─▶ 1-1 ─lost─▶ Lose
//!            └─lost─▶ Lose
//! ```
//!
//! Every set is played with the same set probability, so the chain has a
//! closed form `s²(3 − 2s)` that the tests check against.

use std::fmt;
use std::str::FromStr;

use tennis_chain::{AbsorbingChain, ChainError, ChainState, TransitionBuilder, TransitionMatrix};
use tennis_core::{Player, Probability, UnknownStateError};

use crate::error::ModelError;
use crate::set::SetModel;

/// Number of match states, absorbing ones included.
pub const MATCH_STATE_COUNT: usize = 6;

/// A set score within a best-of-three match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchScore {
    LoveAll,
    OneLove,
    LoveOne,
    OneAll,
    Win,
    Lose,
}

const ALL_MATCH_SCORES: [MatchScore; MATCH_STATE_COUNT] = [
    MatchScore::LoveAll,
    MatchScore::OneLove,
    MatchScore::LoveOne,
    MatchScore::OneAll,
    MatchScore::Win,
    MatchScore::Lose,
];

impl MatchScore {
    /// The states after the player wins or loses the next set.
    pub fn next(&self) -> Option<(Self, Self)> {
        use MatchScore::*;
        match self {
            LoveAll => Some((OneLove, LoveOne)),
            OneLove => Some((Win, OneAll)),
            LoveOne => Some((OneAll, Lose)),
            OneAll => Some((Win, Lose)),
            Win | Lose => None,
        }
    }
}

impl ChainState for MatchScore {
    const LEVEL: &'static str = "match";
    const WIN: Self = MatchScore::Win;
    const LOSE: Self = MatchScore::Lose;
    const START: Self = MatchScore::LoveAll;

    fn all() -> &'static [Self] {
        &ALL_MATCH_SCORES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::LoveAll => "0-0",
            Self::OneLove => "1-0",
            Self::LoveOne => "0-1",
            Self::OneAll => "1-1",
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchScore {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Build the match matrix from the set win probability `sw`.
///
/// # Errors
///
/// Only if the fixed topology fails validation.
pub fn match_matrix(
    sw: Probability,
) -> Result<TransitionMatrix<MatchScore, MATCH_STATE_COUNT>, ChainError> {
    let mut builder = TransitionBuilder::<MatchScore, MATCH_STATE_COUNT>::new()?;
    for score in ALL_MATCH_SCORES {
        if let Some((won, lost)) = score.next() {
            builder.branch(score, won, lost, sw);
        }
    }
    builder.build()
}

/// A player's best-of-three match chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchModel {
    set_win_p: Probability,
    chain: AbsorbingChain<MatchScore, MATCH_STATE_COUNT>,
}

impl MatchModel {
    /// Build the match chain for `player` through the game and set models.
    ///
    /// # Errors
    ///
    /// Any error from [`SetModel::new`].
    pub fn new(player: &Player) -> Result<Self, ModelError> {
        let set = SetModel::new(player)?;
        tracing::debug!(player = player.name(), "building match model");
        Self::from_set_probability(set.set_win_p()?)
    }

    /// Build the match chain from a set win probability.
    ///
    /// # Errors
    ///
    /// [`ModelError::Chain`] if the matrix fails validation.
    pub fn from_set_probability(set_win_p: Probability) -> Result<Self, ModelError> {
        let chain = AbsorbingChain::solve(match_matrix(set_win_p)?)?;
        Ok(Self { set_win_p, chain })
    }

    /// Probability of winning the match from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a match state.
    pub fn match_win_probability(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.chain.win_probability_from(start)?)
    }

    /// Probability of winning the match from `0-0`.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidProbability`] on solver round-off beyond
    /// tolerance.
    pub fn match_win_p(&self) -> Result<Probability, ModelError> {
        let p = self.chain.win_probability(MatchScore::START);
        Ok(Probability::from_solved("match_win_p", p)?)
    }

    /// Expected sets left in the match from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a match state.
    pub fn expected_sets(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.chain.expected_steps_from(start)?)
    }

    /// Set probability the matrix was built from.
    pub fn set_win_p(&self) -> Probability {
        self.set_win_p
    }

    /// The match transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix<MatchScore, MATCH_STATE_COUNT> {
        self.chain.matrix()
    }

    /// Match states in matrix order.
    pub fn states(&self) -> &'static [MatchScore] {
        MatchScore::all()
    }
}

//! # Game Model
//!
//! A standard tennis game as a 20-state absorbing chain.
//!
//! ## States
//!
//! ```text
//! 0-0 ─┬─▶ 15-0 ─┬─▶ 30-0 ─┬─▶ 40-0 ──▶ Win
//!      │         │         │
//!      └─▶ 0-15  └─▶ 15-15 └─▶ 30-15 ...
//!
//! 40-30 ─lost─▶ Deuce ◀─won─ 30-40
//! Deuce ─won─▶ AdIn  ─won─▶ Win,  AdIn  ─lost─▶ Deuce
//! Deuce ─lost▶ AdOut ─lost▶ Lose, AdOut ─won──▶ Deuce
//! ```
//!
//! Scores are from the modelled player's side: `40-15` means the player has
//! 40. The topology is fixed; only the point probability `w` differs between
//! the serving and the returning matrix.

use std::fmt;
use std::str::FromStr;

use tennis_chain::{AbsorbingChain, ChainError, ChainState, TransitionBuilder, TransitionMatrix};
use tennis_core::{Player, Probability, UnknownStateError};

use crate::error::ModelError;

/// Number of game states, absorbing ones included.
pub const GAME_STATE_COUNT: usize = 20;

/// A point score within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointScore {
    LoveAll,
    FifteenLove,
    LoveFifteen,
    FifteenAll,
    ThirtyLove,
    LoveThirty,
    ThirtyFifteen,
    FifteenThirty,
    ThirtyAll,
    FortyLove,
    LoveForty,
    FortyFifteen,
    FifteenForty,
    FortyThirty,
    ThirtyForty,
    Deuce,
    AdIn,
    AdOut,
    Win,
    Lose,
}

const ALL_POINT_SCORES: [PointScore; GAME_STATE_COUNT] = [
    PointScore::LoveAll,
    PointScore::FifteenLove,
    PointScore::LoveFifteen,
    PointScore::FifteenAll,
    PointScore::ThirtyLove,
    PointScore::LoveThirty,
    PointScore::ThirtyFifteen,
    PointScore::FifteenThirty,
    PointScore::ThirtyAll,
    PointScore::FortyLove,
    PointScore::LoveForty,
    PointScore::FortyFifteen,
    PointScore::FifteenForty,
    PointScore::FortyThirty,
    PointScore::ThirtyForty,
    PointScore::Deuce,
    PointScore::AdIn,
    PointScore::AdOut,
    PointScore::Win,
    PointScore::Lose,
];

impl PointScore {
    /// The label used in state lists and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoveAll => "0-0",
            Self::FifteenLove => "15-0",
            Self::LoveFifteen => "0-15",
            Self::FifteenAll => "15-15",
            Self::ThirtyLove => "30-0",
            Self::LoveThirty => "0-30",
            Self::ThirtyFifteen => "30-15",
            Self::FifteenThirty => "15-30",
            Self::ThirtyAll => "30-30",
            Self::FortyLove => "40-0",
            Self::LoveForty => "0-40",
            Self::FortyFifteen => "40-15",
            Self::FifteenForty => "15-40",
            Self::FortyThirty => "40-30",
            Self::ThirtyForty => "30-40",
            Self::Deuce => "Deuce",
            Self::AdIn => "AdIn",
            Self::AdOut => "AdOut",
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }

    /// The states after the player wins or loses the next point, in that
    /// order. `None` once the game is decided.
    pub fn next(&self) -> Option<(Self, Self)> {
        use PointScore::*;
        let pair = match self {
            LoveAll => (FifteenLove, LoveFifteen),
            FifteenLove => (ThirtyLove, FifteenAll),
            LoveFifteen => (FifteenAll, LoveThirty),
            FifteenAll => (ThirtyFifteen, FifteenThirty),
            ThirtyLove => (FortyLove, ThirtyFifteen),
            LoveThirty => (FifteenThirty, LoveForty),
            ThirtyFifteen => (FortyFifteen, ThirtyAll),
            FifteenThirty => (ThirtyAll, FifteenForty),
            ThirtyAll => (FortyThirty, ThirtyForty),
            FortyLove => (Win, FortyFifteen),
            LoveForty => (FifteenForty, Lose),
            FortyFifteen => (Win, FortyThirty),
            FifteenForty => (ThirtyForty, Lose),
            FortyThirty => (Win, Deuce),
            ThirtyForty => (Deuce, Lose),
            Deuce => (AdIn, AdOut),
            AdIn => (Win, Deuce),
            AdOut => (Deuce, Lose),
            Win | Lose => return None,
        };
        Some(pair)
    }
}

impl ChainState for PointScore {
    const LEVEL: &'static str = "game";
    const WIN: Self = PointScore::Win;
    const LOSE: Self = PointScore::Lose;
    const START: Self = PointScore::LoveAll;

    fn all() -> &'static [Self] {
        &ALL_POINT_SCORES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for PointScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointScore {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Build the game matrix for a player who wins each point with
/// probability `w`.
///
/// # Errors
///
/// Only if the fixed topology fails validation, which would be a defect in
/// [`PointScore::next`].
pub fn game_matrix(
    w: Probability,
) -> Result<TransitionMatrix<PointScore, GAME_STATE_COUNT>, ChainError> {
    let mut builder = TransitionBuilder::<PointScore, GAME_STATE_COUNT>::new()?;
    for score in ALL_POINT_SCORES {
        if let Some((won, lost)) = score.next() {
            builder.branch(score, won, lost, w);
        }
    }
    builder.build()
}

/// A player's serving and returning game chains.
#[derive(Debug, Clone, PartialEq)]
pub struct GameModel {
    serving: AbsorbingChain<PointScore, GAME_STATE_COUNT>,
    returning: AbsorbingChain<PointScore, GAME_STATE_COUNT>,
}

impl GameModel {
    /// Build both game chains for `player`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Chain`] if either chain cannot be built or solved.
    pub fn new(player: &Player) -> Result<Self, ModelError> {
        tracing::debug!(player = player.name(), "building game model");
        Self::from_point_probabilities(player.service_win_p(), player.return_win_p())
    }

    /// Build both game chains from raw point probabilities.
    ///
    /// # Errors
    ///
    /// [`ModelError::Chain`] if either chain cannot be built or solved.
    pub fn from_point_probabilities(
        service_win_p: Probability,
        return_win_p: Probability,
    ) -> Result<Self, ModelError> {
        let serving = AbsorbingChain::solve(game_matrix(service_win_p)?)?;
        let returning = AbsorbingChain::solve(game_matrix(return_win_p)?)?;
        Ok(Self { serving, returning })
    }

    /// Probability of winning a service game from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a game state.
    pub fn server_win_probability(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.serving.win_probability_from(start)?)
    }

    /// Probability of winning a return game from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a game state.
    pub fn returner_win_probability(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.returning.win_probability_from(start)?)
    }

    /// Probability of holding serve from `0-0`.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidProbability`] if round-off pushed the solved
    /// value measurably outside `[0, 1]`.
    pub fn server_game_win_p(&self) -> Result<Probability, ModelError> {
        let p = self.serving.win_probability(PointScore::START);
        Ok(Probability::from_solved("server_game_win_p", p)?)
    }

    /// Probability of breaking serve from `0-0`.
    ///
    /// # Errors
    ///
    /// As [`server_game_win_p`](Self::server_game_win_p).
    pub fn returner_game_win_p(&self) -> Result<Probability, ModelError> {
        let p = self.returning.win_probability(PointScore::START);
        Ok(Probability::from_solved("returner_game_win_p", p)?)
    }

    /// Expected points left in a service game from the state labelled
    /// `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a game state.
    pub fn expected_points_serving(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.serving.expected_steps_from(start)?)
    }

    /// Expected points left in a return game from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a game state.
    pub fn expected_points_returning(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.returning.expected_steps_from(start)?)
    }

    /// The serving-game transition matrix.
    pub fn matrix_server(&self) -> &TransitionMatrix<PointScore, GAME_STATE_COUNT> {
        self.serving.matrix()
    }

    /// The returning-game transition matrix.
    pub fn matrix_returner(&self) -> &TransitionMatrix<PointScore, GAME_STATE_COUNT> {
        self.returning.matrix()
    }

    /// Game states in matrix order.
    pub fn states(&self) -> &'static [PointScore] {
        PointScore::all()
    }
}

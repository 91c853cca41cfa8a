//! # Player Report
//!
//! Every headline number for one player, computed in one pass through the
//! three levels: each chain is built and solved exactly once.

use serde::{Deserialize, Serialize};
use tennis_chain::ChainState;
use tennis_core::{Player, Probability};

use crate::error::ModelError;
use crate::game::{GameModel, PointScore};
use crate::set::{SetModel, SetScore};
use crate::tennis_match::{MatchModel, MatchScore};

/// Win probabilities and expected lengths for a player at every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub name: String,
    pub service_win_p: Probability,
    pub return_win_p: Probability,
    /// Probability of holding serve.
    pub server_game_win_p: Probability,
    /// Probability of breaking serve.
    pub returner_game_win_p: Probability,
    pub set_win_p: Probability,
    pub match_win_p: Probability,
    pub expected_points_serving: f64,
    pub expected_points_returning: f64,
    pub expected_games: f64,
    pub expected_sets: f64,
}

impl PlayerReport {
    /// Run the game, set and match models for `player`.
    ///
    /// # Errors
    ///
    /// Any model error, most likely [`ModelError::Chain`] for a degenerate
    /// set chain.
    pub fn compute(player: &Player) -> Result<Self, ModelError> {
        tracing::debug!(player = player.name(), "computing report");
        let game = GameModel::new(player)?;
        let server_game_win_p = game.server_game_win_p()?;
        let returner_game_win_p = game.returner_game_win_p()?;

        let set = SetModel::from_game_probabilities(server_game_win_p, returner_game_win_p)?;
        let set_win_p = set.set_win_p()?;

        let tennis_match = MatchModel::from_set_probability(set_win_p)?;

        Ok(Self {
            name: player.name().to_string(),
            service_win_p: player.service_win_p(),
            return_win_p: player.return_win_p(),
            server_game_win_p,
            returner_game_win_p,
            set_win_p,
            match_win_p: tennis_match.match_win_p()?,
            expected_points_serving: game.expected_points_serving(PointScore::START.label())?,
            expected_points_returning: game.expected_points_returning(PointScore::START.label())?,
            expected_games: set.expected_games(SetScore::START.label())?,
            expected_sets: tennis_match.expected_sets(MatchScore::START.label())?,
        })
    }
}

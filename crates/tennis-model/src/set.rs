//! # Set Model
//!
//! A set without tie-break, won by the first player to six games with a
//! two-game lead, as a 40-state absorbing chain.
//!
//! ## States
//!
//! | Index   | State            | Label          |
//! |---------|------------------|----------------|
//! | `6a+b`  | `a` games to `b` | `"a-b"`        |
//! | 36      | 6-5 to player    | `"6-5"`        |
//! | 37      | 5-6 to player    | `"5-6"`        |
//! | 38      | set won          | `"Win"`        |
//! | 39      | set lost         | `"Lose"`       |
//!
//! for `a, b ∈ [0, 5]`. The ordering is row-major by the player's games.
//!
//! ## Transitions
//!
//! From `(a, b)`:
//!
//! - won: `(a+1, b)` if `a < 5`; `Win` if `a == 5, b < 5`; `6-5` at `5-5`.
//! - lost: `(a, b+1)` if `b < 5`; `Lose` if `b == 5, a < 5`; `5-6` at `5-5`.
//!
//! `6-5` goes to `Win` or back to `5-5`; `5-6` goes back to `5-5` or to
//! `Lose`. Returning to `5-5` plays the role deuce plays inside a game.
//!
//! ## Serve
//!
//! The player serves game `(a, b)` when `a + b` is even, using the hold
//! probability; otherwise the break probability applies. The two advantage
//! states always use the break probability: they stand for the twelfth game,
//! which goes to the player who received in the first game. This is a
//! modelling simplification carried over deliberately, not a strict
//! continuation of the parity rule.

use std::fmt;
use std::str::FromStr;

use tennis_chain::{AbsorbingChain, ChainError, ChainState, TransitionBuilder, TransitionMatrix};
use tennis_core::{Player, Probability, UnknownStateError};

use crate::error::ModelError;
use crate::game::GameModel;

/// Number of set states, absorbing ones included.
pub const SET_STATE_COUNT: usize = 40;

/// Games per side at which a set can be decided.
const GAMES_TO_WIN: u8 = 5;

/// Regular game counts, each at most five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tally {
    player: u8,
    opponent: u8,
}

impl Tally {
    /// `None` if either count exceeds five.
    pub fn new(player: u8, opponent: u8) -> Option<Self> {
        if player <= GAMES_TO_WIN && opponent <= GAMES_TO_WIN {
            Some(Self { player, opponent })
        } else {
            None
        }
    }

    /// Games won by the player.
    pub fn player(&self) -> u8 {
        self.player
    }

    /// Games won by the opponent.
    pub fn opponent(&self) -> u8 {
        self.opponent
    }
}

/// A game score within one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetScore {
    /// Both sides on five games or fewer.
    Games(Tally),
    /// 6-5 to the player.
    AheadByOne,
    /// 5-6 to the player.
    BehindByOne,
    /// Set won (absorbing).
    Win,
    /// Set lost (absorbing).
    Lose,
}

static ALL_SET_SCORES: [SetScore; SET_STATE_COUNT] = all_set_scores();

const fn all_set_scores() -> [SetScore; SET_STATE_COUNT] {
    let mut out = [SetScore::Win; SET_STATE_COUNT];
    let mut i = 0;
    while i < 36 {
        out[i] = SetScore::Games(Tally {
            player: (i / 6) as u8,
            opponent: (i % 6) as u8,
        });
        i += 1;
    }
    out[36] = SetScore::AheadByOne;
    out[37] = SetScore::BehindByOne;
    out[38] = SetScore::Win;
    out[39] = SetScore::Lose;
    out
}

#[rustfmt::skip]
const SET_LABELS: [&str; SET_STATE_COUNT] = [
    "0-0", "0-1", "0-2", "0-3", "0-4", "0-5",
    "1-0", "1-1", "1-2", "1-3", "1-4", "1-5",
    "2-0", "2-1", "2-2", "2-3", "2-4", "2-5",
    "3-0", "3-1", "3-2", "3-3", "3-4", "3-5",
    "4-0", "4-1", "4-2", "4-3", "4-4", "4-5",
    "5-0", "5-1", "5-2", "5-3", "5-4", "5-5",
    "6-5", "5-6", "Win", "Lose",
];

const FIVE_ALL: SetScore = SetScore::Games(Tally {
    player: GAMES_TO_WIN,
    opponent: GAMES_TO_WIN,
});

impl SetScore {
    /// The regular score `player`-`opponent`, if both are at most five.
    pub fn games(player: u8, opponent: u8) -> Option<Self> {
        Tally::new(player, opponent).map(Self::Games)
    }

    /// Whether the modelled player serves the next game from this state.
    pub fn player_serves(&self) -> bool {
        match self {
            Self::Games(t) => (t.player + t.opponent) % 2 == 0,
            Self::AheadByOne | Self::BehindByOne | Self::Win | Self::Lose => false,
        }
    }

    /// The states after the player wins or loses the next game, in that
    /// order. `None` once the set is decided.
    pub fn next(&self) -> Option<(Self, Self)> {
        match *self {
            Self::Games(Tally { player, opponent }) => {
                let won = if player < GAMES_TO_WIN {
                    Self::Games(Tally {
                        player: player + 1,
                        opponent,
                    })
                } else if opponent < GAMES_TO_WIN {
                    Self::Win
                } else {
                    Self::AheadByOne
                };
                let lost = if opponent < GAMES_TO_WIN {
                    Self::Games(Tally {
                        player,
                        opponent: opponent + 1,
                    })
                } else if player < GAMES_TO_WIN {
                    Self::Lose
                } else {
                    Self::BehindByOne
                };
                Some((won, lost))
            }
            Self::AheadByOne => Some((Self::Win, FIVE_ALL)),
            Self::BehindByOne => Some((FIVE_ALL, Self::Lose)),
            Self::Win | Self::Lose => None,
        }
    }
}

impl ChainState for SetScore {
    const LEVEL: &'static str = "set";
    const WIN: Self = SetScore::Win;
    const LOSE: Self = SetScore::Lose;
    const START: Self = SetScore::Games(Tally {
        player: 0,
        opponent: 0,
    });

    fn all() -> &'static [Self] {
        &ALL_SET_SCORES
    }

    fn index(self) -> usize {
        match self {
            Self::Games(t) => 6 * t.player as usize + t.opponent as usize,
            Self::AheadByOne => 36,
            Self::BehindByOne => 37,
            Self::Win => 38,
            Self::Lose => 39,
        }
    }

    fn label(self) -> &'static str {
        SET_LABELS[self.index()]
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SetScore {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Build the set matrix from the hold probability `w` and the break
/// probability `rw`.
///
/// # Errors
///
/// Only if the fixed topology fails validation.
pub fn set_matrix(
    w: Probability,
    rw: Probability,
) -> Result<TransitionMatrix<SetScore, SET_STATE_COUNT>, ChainError> {
    let mut builder = TransitionBuilder::<SetScore, SET_STATE_COUNT>::new()?;
    for score in ALL_SET_SCORES.iter().copied() {
        if let Some((won, lost)) = score.next() {
            let p = if score.player_serves() { w } else { rw };
            builder.branch(score, won, lost, p);
        }
    }
    builder.build()
}

/// A player's set chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SetModel {
    server_game_win_p: Probability,
    returner_game_win_p: Probability,
    chain: AbsorbingChain<SetScore, SET_STATE_COUNT>,
}

impl SetModel {
    /// Build the set chain for `player`, running the game model once to get
    /// the hold and break probabilities.
    ///
    /// # Errors
    ///
    /// [`ModelError::Chain`] if a chain is degenerate, for instance a player
    /// who always holds and never breaks.
    pub fn new(player: &Player) -> Result<Self, ModelError> {
        let game = GameModel::new(player)?;
        tracing::debug!(player = player.name(), "building set model");
        Self::from_game_probabilities(game.server_game_win_p()?, game.returner_game_win_p()?)
    }

    /// Build the set chain from hold and break probabilities directly.
    ///
    /// # Errors
    ///
    /// [`ModelError::Chain`] if the chain is degenerate.
    pub fn from_game_probabilities(
        server_game_win_p: Probability,
        returner_game_win_p: Probability,
    ) -> Result<Self, ModelError> {
        let matrix = set_matrix(server_game_win_p, returner_game_win_p)?;
        let chain = AbsorbingChain::solve(matrix)?;
        Ok(Self {
            server_game_win_p,
            returner_game_win_p,
            chain,
        })
    }

    /// Probability of winning the set from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a set state.
    pub fn set_win_probability(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.chain.win_probability_from(start)?)
    }

    /// Probability of winning the set from `0-0`.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidProbability`] on solver round-off beyond
    /// tolerance.
    pub fn set_win_p(&self) -> Result<Probability, ModelError> {
        let p = self.chain.win_probability(SetScore::START);
        Ok(Probability::from_solved("set_win_p", p)?)
    }

    /// Expected games left in the set from the state labelled `start`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownState`] if `start` is not a set state.
    pub fn expected_games(&self, start: &str) -> Result<f64, ModelError> {
        Ok(self.chain.expected_steps_from(start)?)
    }

    /// Hold probability the matrix was built from.
    pub fn server_game_win_p(&self) -> Probability {
        self.server_game_win_p
    }

    /// Break probability the matrix was built from.
    pub fn returner_game_win_p(&self) -> Probability {
        self.returner_game_win_p
    }

    /// The set transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix<SetScore, SET_STATE_COUNT> {
        self.chain.matrix()
    }

    /// Set states in matrix order.
    pub fn states(&self) -> &'static [SetScore] {
        SetScore::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tennis_chain::ROW_SUM_TOLERANCE;

    fn p(v: f64) -> Probability {
        Probability::new("p", v).unwrap()
    }

    /// Parse `"a-b"` into numbers without going through `SetScore`.
    fn parse_pair(label: &str) -> Option<(u8, u8)> {
        let (a, b) = label.split_once('-')?;
        Some((a.parse().ok()?, b.parse().ok()?))
    }

    /// Expected (won, lost) labels derived from the scoring rules alone.
    fn expected_targets(label: &str) -> Option<(String, String)> {
        let (a, b) = parse_pair(label)?;
        Some(match (a, b) {
            (6, 5) => ("Win".into(), "5-5".into()),
            (5, 6) => ("5-5".into(), "Lose".into()),
            (5, 5) => ("6-5".into(), "5-6".into()),
            _ => {
                let won = if a < 5 { format!("{}-{}", a + 1, b) } else { "Win".into() };
                let lost = if b < 5 { format!("{}-{}", a, b + 1) } else { "Lose".into() };
                (won, lost)
            }
        })
    }

    #[test]
    fn test_index_label_bijection() {
        assert_eq!(SetScore::all().len(), SET_STATE_COUNT);
        for (i, score) in SetScore::all().iter().enumerate() {
            assert_eq!(score.index(), i, "{score:?}");
            assert_eq!(SetScore::from_label(score.label()).unwrap(), *score);
        }
        for a in 0..=5u8 {
            for b in 0..=5u8 {
                let score = SetScore::games(a, b).unwrap();
                assert_eq!(score.index(), 6 * a as usize + b as usize);
                assert_eq!(score.label(), format!("{a}-{b}"));
            }
        }
        assert_eq!(SetScore::AheadByOne.label(), "6-5");
        assert_eq!(SetScore::BehindByOne.label(), "5-6");
        assert_eq!(SetScore::Win.index(), 38);
        assert_eq!(SetScore::Lose.index(), 39);
    }

    #[test]
    fn test_tally_bounds() {
        assert!(SetScore::games(6, 0).is_none());
        assert!(SetScore::games(0, 6).is_none());
        assert!(SetScore::games(5, 5).is_some());
    }

    #[test]
    fn test_every_transition_targets_intended_label() {
        let m = set_matrix(p(0.7), p(0.3)).unwrap();
        let mut checked = 0;
        for score in SetScore::all().iter().copied() {
            let Some((won_label, lost_label)) = expected_targets(score.label()) else {
                assert!(score.is_absorbing());
                assert_eq!(m.successors(score), vec![(score, 1.0)]);
                continue;
            };
            let (won, lost) = score.next().unwrap();
            assert_eq!(won.label(), won_label, "won from {score}");
            assert_eq!(lost.label(), lost_label, "lost from {score}");

            let (pw, pl) = if score.player_serves() { (0.7, 0.3) } else { (0.3, 0.7) };
            assert!((m.get(score, won) - pw).abs() < 1e-12, "won entry from {score}");
            assert!((m.get(score, lost) - pl).abs() < 1e-12, "lost entry from {score}");
            assert_eq!(m.successors(score).len(), 2, "out-degree from {score}");
            checked += 1;
        }
        assert_eq!(checked, 38);
    }

    #[test]
    fn test_serve_alternates_by_games_played() {
        let serves = |label: &str| SetScore::from_label(label).unwrap().player_serves();
        assert!(serves("0-0"));
        assert!(!serves("1-0"));
        assert!(!serves("0-1"));
        assert!(serves("1-1"));
        assert!(serves("4-2"));
        assert!(!serves("5-4"));
        assert!(serves("5-5"));
        // Advantage games always use the break probability.
        assert!(!serves("6-5"));
        assert!(!serves("5-6"));
    }

    #[test]
    fn test_advantage_rows_use_break_probability() {
        let m = set_matrix(p(0.8), p(0.25)).unwrap();
        assert_eq!(m.get(SetScore::AheadByOne, SetScore::Win), 0.25);
        assert_eq!(m.get(SetScore::AheadByOne, FIVE_ALL), 0.75);
        assert_eq!(m.get(SetScore::BehindByOne, FIVE_ALL), 0.25);
        assert_eq!(m.get(SetScore::BehindByOne, SetScore::Lose), 0.75);
    }

    #[test]
    fn test_rows_are_stochastic() {
        let m = set_matrix(p(0.733640), p(0.372081)).unwrap();
        for s in SetScore::all() {
            assert!((m.row_sum(*s) - 1.0).abs() <= ROW_SUM_TOLERANCE);
        }
    }

    #[test]
    fn test_fair_games_give_fair_set() {
        let model = SetModel::from_game_probabilities(p(0.5), p(0.5)).unwrap();
        assert!((model.set_win_probability("0-0").unwrap() - 0.5).abs() < 1e-12);
        assert!((model.set_win_probability("5-5").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sabalenka_fixture() {
        let player = Player::new("Sabalenka", 0.599, 0.448).unwrap();
        let model = SetModel::new(&player).unwrap();
        let got = model.set_win_p().unwrap().value();
        assert!((got - 0.666178).abs() < 1e-4, "set {got}");
        assert!((model.set_win_probability("5-5").unwrap() - 0.620075).abs() < 1e-4);
        assert!((model.set_win_probability("6-5").unwrap() - 0.761438).abs() < 1e-4);
        assert!((model.set_win_probability("5-6").unwrap() - 0.230718).abs() < 1e-4);
        assert!((model.set_win_probability("5-0").unwrap() - 0.993327).abs() < 1e-4);
        assert_eq!(model.set_win_probability("Win").unwrap(), 1.0);
        assert_eq!(model.set_win_probability("Lose").unwrap(), 0.0);
    }

    #[test]
    fn test_expected_games() {
        let model = SetModel::from_game_probabilities(p(0.5), p(0.5)).unwrap();
        let games = model.expected_games("0-0").unwrap();
        assert!((games - 10.03125).abs() < 1e-9, "{games}");
        // From 6-5 at even odds: one more game, then 5-5 half the time.
        let from_ad = model.expected_games("6-5").unwrap();
        let from_five_all = model.expected_games("5-5").unwrap();
        assert!((from_ad - (1.0 + 0.5 * from_five_all)).abs() < 1e-9);
    }

    #[test]
    fn test_same_player_same_model() {
        let player = Player::new("Sabalenka", 0.599, 0.448).unwrap();
        let a = SetModel::new(&player).unwrap();
        let b = SetModel::new(&player).unwrap();
        assert_eq!(a.matrix(), b.matrix());
        assert_eq!(
            a.set_win_probability("0-0").unwrap().to_bits(),
            b.set_win_probability("0-0").unwrap().to_bits()
        );
    }

    #[test]
    fn test_always_hold_never_break_is_degenerate() {
        let err =
            SetModel::from_game_probabilities(Probability::ONE, Probability::ZERO).unwrap_err();
        assert_eq!(
            err,
            ModelError::Chain(ChainError::DegenerateChain { state: "0-0" })
        );
    }

    #[test]
    fn test_extreme_players_hold_exactly_and_stall() {
        for (serve, ret) in [(1.0, 0.0), (0.0, 1.0)] {
            let player = Player::new("Extreme", serve, ret).unwrap();
            let games = GameModel::new(&player).unwrap();
            assert_eq!(games.server_game_win_p().unwrap().value(), serve);
            assert_eq!(games.returner_game_win_p().unwrap().value(), ret);
            assert_eq!(
                SetModel::new(&player).unwrap_err(),
                ModelError::Chain(ChainError::DegenerateChain { state: "0-0" })
            );
        }
    }

    #[test]
    fn test_always_hold_with_some_breaks_is_well_posed() {
        let model = SetModel::from_game_probabilities(Probability::ONE, p(0.5)).unwrap();
        let got = model.set_win_probability("0-0").unwrap();
        assert!(got > 0.5 && got <= 1.0 + 1e-12, "{got}");
    }

    #[test]
    fn test_unknown_start_state() {
        let model = SetModel::from_game_probabilities(p(0.6), p(0.4)).unwrap();
        assert!(matches!(
            model.set_win_probability("7-5"),
            Err(ModelError::UnknownState(_))
        ));
        assert!(model.set_win_probability("6-6").is_err());
    }
}

//! # tennis-model — Game, Set and Match Models
//!
//! Three stacked absorbing chains, each consuming the win probability of the
//! level below:
//!
//! ```text
//! Player ──▶ GameModel ──▶ (server game p, returner game p)
//!                               │
//!                               ▼
//!                          SetModel ──▶ set p ──▶ MatchModel ──▶ match p
//! ```
//!
//! - **Game** (`game.rs`): 20 states, deuce/advantage scoring. Built twice
//!   per player, once from the serve point probability and once from the
//!   return point probability.
//!
//! - **Set** (`set.rs`): 40 states, win by two games with no tie-break.
//!   The player serves when the games played so far are even.
//!
//! - **Match** (`tennis_match.rs`): 6 states, best of three sets with a
//!   constant set probability.
//!
//! - **Report** (`report.rs`): all three levels for one player, computed
//!   once, serializable.
//!
//! Every model is immutable after construction. Its matrix is built and
//! solved in the constructor; queries only look up the solution.

pub mod error;
pub mod game;
pub mod report;
pub mod set;
pub mod tennis_match;

pub use error::ModelError;
pub use game::{game_matrix, GameModel, PointScore};
pub use report::PlayerReport;
pub use set::{set_matrix, SetModel, SetScore};
pub use tennis_match::{match_matrix, MatchModel, MatchScore};

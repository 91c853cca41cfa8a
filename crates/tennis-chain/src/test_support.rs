//! A first-to-two-points race, the smallest chain with a tied state.

use std::fmt;

use crate::matrix::{TransitionBuilder, TransitionMatrix};
use crate::state::ChainState;
use tennis_core::Probability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Race {
    Love,
    OneLove,
    LoveOne,
    OneAll,
    Win,
    Lose,
}

const ALL: [Race; 6] = [
    Race::Love,
    Race::OneLove,
    Race::LoveOne,
    Race::OneAll,
    Race::Win,
    Race::Lose,
];

impl ChainState for Race {
    const LEVEL: &'static str = "race";
    const WIN: Self = Race::Win;
    const LOSE: Self = Race::Lose;
    const START: Self = Race::Love;

    fn all() -> &'static [Self] {
        &ALL
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Race::Love => "0-0",
            Race::OneLove => "1-0",
            Race::LoveOne => "0-1",
            Race::OneAll => "1-1",
            Race::Win => "Win",
            Race::Lose => "Lose",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn race_matrix(p: f64) -> TransitionMatrix<Race, 6> {
    let p = Probability::new("p", p).unwrap();
    let mut b = TransitionBuilder::<Race, 6>::new().unwrap();
    b.branch(Race::Love, Race::OneLove, Race::LoveOne, p)
        .branch(Race::OneLove, Race::Win, Race::OneAll, p)
        .branch(Race::LoveOne, Race::OneAll, Race::Lose, p)
        .branch(Race::OneAll, Race::Win, Race::Lose, p);
    b.build().unwrap()
}

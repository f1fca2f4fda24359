//! Computer opponent strategies.
//!
//! A strategy only proposes a coordinate. It never touches the board, and
//! the proposal may be occupied: the session validates it and asks again.
//! Randomness comes from the caller so games can be replayed from a seed.

mod easy;
mod hard;

pub use easy::{EasyStrategy, propose_easy};
pub use hard::HardStrategy;

use crate::position::Coordinate;
use crate::types::Board;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Move selection for the computer opponent.
pub trait Strategy {
    /// Proposes the next coordinate for the opponent mark.
    fn propose(&self, board: &Board, rng: &mut dyn RngCore) -> Coordinate;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Opponent strength, chosen once per session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random cells.
    #[default]
    Easy,
    /// Prioritized tactical rules.
    Hard,
}

impl Difficulty {
    /// Interprets a typed selection.
    ///
    /// Only `"hard"` (trimmed, any case) selects [`Difficulty::Hard`];
    /// everything else, including an empty string, is easy.
    #[instrument]
    pub fn from_selection(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Easy
        }
    }

    /// The strategy implementing this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &EasyStrategy,
            Difficulty::Hard => &HardStrategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_selection() {
        assert_eq!(Difficulty::from_selection("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_selection("  HaRd \n"), Difficulty::Hard);
        assert_eq!(Difficulty::from_selection("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_selection(""), Difficulty::Easy);
        assert_eq!(Difficulty::from_selection("harder"), Difficulty::Easy);
    }

    #[test]
    fn test_strategy_matches_difficulty() {
        for difficulty in Difficulty::iter() {
            assert_eq!(difficulty.strategy().name(), difficulty.to_string());
        }
    }

    #[test]
    fn test_difficulties_differ_on_empty_board() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(11);

        let hard: HashSet<Coordinate> = (0..50)
            .map(|_| Difficulty::Hard.strategy().propose(&board, &mut rng))
            .collect();
        assert_eq!(hard, HashSet::from([Coordinate::CENTER]));

        let easy: HashSet<Coordinate> = (0..50)
            .map(|_| Difficulty::Easy.strategy().propose(&board, &mut rng))
            .collect();
        assert!(easy.len() > 1, "easy kept proposing {:?}", easy);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}

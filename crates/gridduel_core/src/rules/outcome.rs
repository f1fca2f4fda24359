//! Whole-board evaluation.

use super::win::check_winner;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    Undecided,
    /// A line is complete.
    Win(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Win(mark) => write!(f, "{} wins", mark.symbol()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// A completed line wins even on a full board; a draw needs a full board
/// without one.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

//! Moves and the errors raised when applying them.

use crate::position::Coordinate;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who played.
    pub mark: Mark,
    /// Where.
    pub coord: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coord: Coordinate) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.coord)
    }
}

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: the human is asked again, the computer
/// simply proposes another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Coordinate),

    /// The other side is to move.
    #[display("It's not {:?}'s turn", _0)]
    NotYourTurn(Mark),

    /// The session reached a win or draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

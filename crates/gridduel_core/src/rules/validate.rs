//! Move validation.

use crate::action::MoveError;
use crate::position::Coordinate;
use crate::types::Board;
use tracing::instrument;

/// Accepts a move only onto an empty cell.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, coord: Coordinate) -> Result<(), MoveError> {
    if board.is_available(coord) {
        Ok(())
    } else {
        Err(MoveError::OccupiedCell(coord))
    }
}

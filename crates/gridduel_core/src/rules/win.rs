//! Winning lines and win detection.

use crate::position::Coordinate;
use crate::types::{Board, Cell, Mark};
use tracing::{instrument, warn};

/// Three coordinates that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine([Coordinate; 3]);

impl WinningLine {
    /// The line's coordinates.
    pub fn coords(&self) -> [Coordinate; 3] {
        self.0
    }

    /// The current contents of the line on `board`.
    pub fn cells(&self, board: &Board) -> [Cell; 3] {
        self.0.map(|coord| board.cell_at(coord))
    }

    /// True if `coord` lies on this line.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.0.contains(&coord)
    }

    /// The two cells that complete this line together with `coord`.
    ///
    /// `None` when `coord` is not on the line.
    pub fn others(&self, coord: Coordinate) -> Option<[Coordinate; 2]> {
        match self.0 {
            [a, b, c] if a == coord => Some([b, c]),
            [a, b, c] if b == coord => Some([a, c]),
            [a, b, c] if c == coord => Some([a, b]),
            _ => None,
        }
    }

    /// The mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        match self.cells(board).map(Cell::mark) {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        }
    }
}

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = {
    const fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::at(x, y)
    }
    [
        // Rows
        WinningLine([c(0, 0), c(1, 0), c(2, 0)]),
        WinningLine([c(0, 1), c(1, 1), c(2, 1)]),
        WinningLine([c(0, 2), c(1, 2), c(2, 2)]),
        // Columns
        WinningLine([c(0, 0), c(0, 1), c(0, 2)]),
        WinningLine([c(1, 0), c(1, 1), c(1, 2)]),
        WinningLine([c(2, 0), c(2, 1), c(2, 2)]),
        // Diagonals
        WinningLine([c(0, 0), c(1, 1), c(2, 2)]),
        WinningLine([c(2, 0), c(1, 1), c(0, 2)]),
    ]
};

/// Checks if there is a winner on the board.
///
/// Every line is scanned. If more than one is complete (only possible when
/// play continued past a win) the first in scan order decides.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let mut owners = LINES.iter().filter_map(|line| line.owner(board));
    let winner = owners.next();
    let extra = owners.count();
    if extra > 0 {
        warn!(?winner, extra, "Board has more than one completed line");
    }
    winner
}

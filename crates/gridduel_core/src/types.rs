//! Core domain types for tic-tac-toe.

use crate::position::{Coordinate, OutOfRange, SIDE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Owner of a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player, drawn as `X`.
    Player,
    /// The computer opponent, drawn as `O`.
    Opponent,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Symbol used when rendering: `-`, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    /// Parses a rendering symbol back into a cell.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::Occupied(Mark::Player)),
            'O' => Some(Cell::Occupied(Mark::Opponent)),
            _ => None,
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 tic-tac-toe board.
///
/// Storage is row-major (`cells[y][x]`); callers only ever see
/// [`Coordinate`]s with `x` as column and `y` as row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a coordinate.
    pub fn cell_at(&self, coord: Coordinate) -> Cell {
        self.cells[coord.y()][coord.x()]
    }

    /// Raw access by column and row.
    ///
    /// Fails with [`OutOfRange`] when either index is off the board.
    #[instrument(skip(self))]
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, OutOfRange> {
        Coordinate::new(x, y).map(|coord| self.cell_at(coord))
    }

    /// True iff nothing has been placed at `coord`.
    pub fn is_available(&self, coord: Coordinate) -> bool {
        self.cell_at(coord) == Cell::Empty
    }

    /// Places a mark.
    ///
    /// Callers check [`Board::is_available`] first; overwriting a mark is a
    /// caller error and is only logged here.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coordinate, mark: Mark) {
        if !self.is_available(coord) {
            warn!(%coord, occupant = ?self.cell_at(coord), "Overwriting an occupied cell");
        }
        self.cells[coord.y()][coord.x()] = Cell::Occupied(mark);
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Coordinate::ALL
            .into_iter()
            .map(move |coord| (coord, self.cell_at(coord)))
    }

    /// True if `mark` appears anywhere on the board.
    pub fn contains(&self, mark: Mark) -> bool {
        self.cells().any(|(_, cell)| cell == Cell::Occupied(mark))
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| cell != Cell::Empty)
    }
}

impl std::fmt::Display for Board {
    /// Renders one pipe-delimited row per line, e.g. `| X | - | O |`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell)?;
            }
            if y + 1 < SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads rows of `-`, `X` and `O` separated by `/` or newlines.
    /// Spaces and `|` are ignored, so rendered boards parse back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .filter(|row| !row.trim().is_empty())
            .collect();
        if rows.len() != SIDE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            let cells = row
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '|')
                .map(|c| Cell::from_symbol(c).ok_or(ParseBoardError::Symbol(c)))
                .collect::<Result<Vec<_>, _>>()?;
            if cells.len() != SIDE {
                return Err(ParseBoardError::RowWidth { row: y, width: cells.len() });
            }
            for (x, cell) in cells.into_iter().enumerate() {
                board.cells[y][x] = cell;
            }
        }
        Ok(board)
    }
}

/// A textual board could not be read.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(usize),
    /// A row had the wrong number of cells.
    #[display("Row {} has {} cells, expected 3", row, width)]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Cells found.
        width: usize,
    },
    /// Unknown cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    Symbol(char),
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
        assert!(Coordinate::ALL.iter().all(|c| board.is_available(*c)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_then_read_back() {
        let mut board = Board::new();
        board.place(Coordinate::TOP_RIGHT, Mark::Player);

        assert_eq!(board.cell_at(Coordinate::TOP_RIGHT), Cell::Occupied(Mark::Player));
        assert_eq!(board.get(2, 0), Ok(Cell::Occupied(Mark::Player)));
        // Row-major storage must not transpose x and y.
        assert_eq!(board.get(0, 2), Ok(Cell::Empty));
        assert_eq!(board.cells().filter(|(_, cell)| *cell == Cell::Empty).count(), 8);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 1), Err(OutOfRange { x: 3, y: 1 }));
    }

    #[test]
    fn test_availability_tracks_placements() {
        let mut board = Board::new();
        board.place(Coordinate::CENTER, Mark::Opponent);
        for coord in Coordinate::ALL {
            assert_eq!(board.is_available(coord), coord != Coordinate::CENTER);
        }
    }

    #[test]
    fn test_contains() {
        let mut board = Board::new();
        assert!(!board.contains(Mark::Opponent));
        board.place(Coordinate::BOTTOM_LEFT, Mark::Opponent);
        assert!(board.contains(Mark::Opponent));
        assert!(!board.contains(Mark::Player));
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Occupied(Mark::Opponent).mark(), Some(Mark::Opponent));
    }

    #[test]
    fn test_display_uses_symbols() {
        let board: Board = "X-O/-X-/--O".parse().unwrap();
        assert_eq!(board.to_string(), "| X | - | O |\n| - | X | - |\n| - | - | O |");
    }

    #[test]
    fn test_rendered_board_parses_back() {
        let board: Board = "XO-/-X-/O--".parse().unwrap();
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO-/---".parse::<Board>(), Err(ParseBoardError::RowCount(2)));
        assert_eq!(
            "XO/---/---".parse::<Board>(),
            Err(ParseBoardError::RowWidth { row: 0, width: 2 })
        );
        assert_eq!("XZ-/---/---".parse::<Board>(), Err(ParseBoardError::Symbol('Z')));
    }
}

//! Board coordinates and their text form.
//!
//! A [`Coordinate`] is always on the board: both components lie in `0..=2`.
//! The invariant is enforced at construction, so everything downstream
//! (board access, rules, strategies) can index without further checks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells along each side of the board.
pub const SIDE: usize = 3;

/// A cell address, `x` is the column and `y` the row.
///
/// `(0, 0)` is the top-left corner, `(2, 0)` the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// Top-left corner.
    pub const TOP_LEFT: Coordinate = Coordinate::at(0, 0);
    /// Top-right corner.
    pub const TOP_RIGHT: Coordinate = Coordinate::at(2, 0);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Coordinate = Coordinate::at(0, 2);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Coordinate = Coordinate::at(2, 2);
    /// Center cell.
    pub const CENTER: Coordinate = Coordinate::at(1, 1);

    /// The four corners in preference order.
    pub const CORNERS: [Coordinate; 4] = [
        Coordinate::TOP_LEFT,
        Coordinate::TOP_RIGHT,
        Coordinate::BOTTOM_LEFT,
        Coordinate::BOTTOM_RIGHT,
    ];

    /// All 9 coordinates, row by row.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(1, 0),
        Coordinate::at(2, 0),
        Coordinate::at(0, 1),
        Coordinate::at(1, 1),
        Coordinate::at(2, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 2),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting components outside the board.
    #[instrument]
    pub fn new(x: usize, y: usize) -> Result<Self, OutOfRange> {
        if x < SIDE && y < SIDE {
            Ok(Self { x, y })
        } else {
            Err(OutOfRange { x, y })
        }
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column.
    pub fn x(self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(self) -> usize {
        self.y
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = OutOfRange;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses the `"X,Y"` form typed by a human player.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|piece| {
                let piece = piece.trim();
                piece
                    .parse::<i64>()
                    .map_err(|_| ParseCoordinateError::NotAnInteger(piece.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[x, y] = values.as_slice() else {
            return Err(ParseCoordinateError::Arity(values.len()));
        };

        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(cx), Ok(cy)) => {
                Coordinate::new(cx, cy).map_err(|_| ParseCoordinateError::OutOfRange(x, y))
            }
            _ => Err(ParseCoordinateError::OutOfRange(x, y)),
        }
    }
}

/// A coordinate component fell outside `0..=2`.
///
/// Reaching this from validated input is a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Coordinate ({}, {}) is outside the 3x3 board", x, y)]
pub struct OutOfRange {
    /// Offending column.
    pub x: usize,
    /// Offending row.
    pub y: usize,
}

impl std::error::Error for OutOfRange {}

/// Typed coordinate text could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCoordinateError {
    /// A piece of the input is not an integer.
    #[display("{:?} is not a whole number", _0)]
    NotAnInteger(String),

    /// The input did not contain exactly two values.
    #[display("Expected two values separated by a comma, found {}", _0)]
    Arity(usize),

    /// Both values parsed but at least one is off the board.
    #[display("{},{} is off the board (values must be 0, 1 or 2)", _0, _1)]
    OutOfRange(i64, i64),
}

impl std::error::Error for ParseCoordinateError {}

//! Uniformly random opponent.

use super::Strategy;
use crate::position::{Coordinate, SIDE};
use crate::types::Board;
use rand::{Rng, RngCore};

/// Draws a column and a row independently, ignoring the board.
///
/// The result may be occupied.
pub fn propose_easy<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let x = rng.random_range(0..SIDE);
    let y = rng.random_range(0..SIDE);
    Coordinate::at(x, y)
}

/// Random play.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyStrategy;

impl Strategy for EasyStrategy {
    fn propose(&self, _board: &Board, rng: &mut dyn RngCore) -> Coordinate {
        propose_easy(rng)
    }

    fn name(&self) -> &str {
        "easy"
    }
}

//! Rule-based opponent.
//!
//! Rules are tried top to bottom and the first that yields a coordinate
//! wins. There is no scoring and no search.
//!
//! 1. Opening: center, or a random corner if the player took the center.
//! 2. Complete a line holding two opponent marks.
//! 3. Block a line holding two player marks.
//! 4. First empty corner with at least one line free of player marks.
//! 5. Otherwise a random coordinate, as [`EasyStrategy`](super::EasyStrategy).

use super::Strategy;
use super::easy::propose_easy;
use crate::position::Coordinate;
use crate::rules::LINES;
use crate::types::{Board, Cell, Mark};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

type Rule = fn(&Board, &mut dyn RngCore) -> Option<Coordinate>;

const RULES: [(&str, Rule); 4] = [
    ("opening", opening),
    ("complete line", complete_line),
    ("block line", block_line),
    ("safe corner", safe_corner),
];

/// Prioritized tactical play.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardStrategy;

impl Strategy for HardStrategy {
    #[instrument(skip_all)]
    fn propose(&self, board: &Board, rng: &mut dyn RngCore) -> Coordinate {
        for (name, rule) in RULES {
            if let Some(coord) = rule(board, rng) {
                debug!(rule = name, %coord, "Rule matched");
                return coord;
            }
        }
        let coord = propose_easy(rng);
        debug!(%coord, "No rule matched, proposing at random");
        coord
    }

    fn name(&self) -> &str {
        "hard"
    }
}

/// First opponent move, detected by the opponent mark being absent.
fn opening(board: &Board, rng: &mut dyn RngCore) -> Option<Coordinate> {
    if board.contains(Mark::Opponent) {
        return None;
    }
    if board.cell_at(Coordinate::CENTER) == Cell::Occupied(Mark::Player) {
        Coordinate::CORNERS.choose(rng).copied()
    } else {
        Some(Coordinate::CENTER)
    }
}

fn complete_line(board: &Board, _rng: &mut dyn RngCore) -> Option<Coordinate> {
    open_cell_of_pair(board, Mark::Opponent)
}

fn block_line(board: &Board, _rng: &mut dyn RngCore) -> Option<Coordinate> {
    open_cell_of_pair(board, Mark::Player)
}

/// The empty cell of the first line holding two `mark`s and nothing else.
fn open_cell_of_pair(board: &Board, mark: Mark) -> Option<Coordinate> {
    LINES.iter().find_map(|line| {
        let mut owned = 0;
        let mut empty = None;
        for coord in line.coords() {
            match board.cell_at(coord) {
                Cell::Empty => empty = Some(coord),
                Cell::Occupied(m) if m == mark => owned += 1,
                Cell::Occupied(_) => return None,
            }
        }
        if owned == 2 { empty } else { None }
    })
}

/// First empty corner that still has a line through it free of player
/// marks. A line already holding opponent marks counts as free.
fn safe_corner(board: &Board, _rng: &mut dyn RngCore) -> Option<Coordinate> {
    let blocked = |coord: Coordinate| board.cell_at(coord) == Cell::Occupied(Mark::Player);
    Coordinate::CORNERS.into_iter().find(|&corner| {
        board.is_available(corner)
            && LINES
                .iter()
                .filter_map(|line| line.others(corner))
                .any(|bundle| !bundle.into_iter().any(blocked))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn propose(board: &str, seed: u64) -> Coordinate {
        let board: Board = board.parse().unwrap();
        HardStrategy.propose(&board, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_opening_on_empty_board_takes_center() {
        for seed in 0..10 {
            assert_eq!(propose("---/---/---", seed), Coordinate::CENTER);
        }
    }

    #[test]
    fn test_opening_after_edge_takes_center() {
        assert_eq!(propose("-X-/---/---", 0), Coordinate::CENTER);
        assert_eq!(propose("---/---/X--", 0), Coordinate::CENTER);
    }

    #[test]
    fn test_opening_after_center_takes_random_corner() {
        let board: Board = "---/-X-/---".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Coordinate, usize> = HashMap::new();
        for _ in 0..4000 {
            let coord = HardStrategy.propose(&board, &mut rng);
            assert!(coord.is_corner(), "non-corner opening {}", coord);
            *counts.entry(coord).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        // Expect about 1000 each.
        assert!(counts.values().all(|&n| (850..=1150).contains(&n)), "{:?}", counts);
    }

    #[test]
    fn test_blocks_top_row() {
        assert_eq!(propose("XX-/-O-/---", 0), Coordinate::TOP_RIGHT);
    }

    #[test]
    fn test_blocks_gap_in_column() {
        assert_eq!(propose("X--/-O-/X--", 0), Coordinate::new(0, 1).unwrap());
    }

    #[test]
    fn test_completes_diagonal() {
        assert_eq!(propose("OX-/XO-/---", 0), Coordinate::BOTTOM_RIGHT);
    }

    #[test]
    fn test_win_beats_block() {
        // Player threatens the top row, opponent can finish the middle row.
        assert_eq!(propose("XX-/OO-/X--", 0), Coordinate::new(2, 1).unwrap());
    }

    #[test]
    fn test_mixed_line_is_not_a_threat() {
        // Top row holds one of each, so no pair rule applies.
        let board: Board = "XO-/---/---".parse().unwrap();
        assert_eq!(open_cell_of_pair(&board, Mark::Player), None);
        assert_eq!(open_cell_of_pair(&board, Mark::Opponent), None);
    }

    #[test]
    fn test_corner_preference_order() {
        // Opponent has moved, no pairs: top-left is empty with clear lines.
        assert_eq!(propose("---/-O-/-X-", 0), Coordinate::TOP_LEFT);
    }

    #[test]
    fn test_corner_skipped_when_every_bundle_has_player_mark() {
        // Top-left: row has X at (1,0), column has X at (0,1), diagonal has
        // X at (2,2). Top-right is the first safe corner.
        assert_eq!(propose("-X-/XO-/--X", 0), Coordinate::TOP_RIGHT);
    }

    #[test]
    fn test_corner_next_to_own_marks_counts_as_safe() {
        // Top-left: column and diagonal hold X, the row holds only O.
        let board: Board = "-OO/XX-/---".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(safe_corner(&board, &mut rng), Some(Coordinate::TOP_LEFT));
    }

    #[test]
    fn test_falls_back_to_easy_without_corners() {
        // All corners taken, no pairs for either side.
        let board: Board = "XOX/---/OXO".parse().unwrap();
        let mut hard_rng = StdRng::seed_from_u64(5);
        let mut easy_rng = StdRng::seed_from_u64(5);

        let proposals: Vec<Coordinate> = (0..200)
            .map(|_| HardStrategy.propose(&board, &mut hard_rng))
            .collect();
        let expected: Vec<Coordinate> = (0..200).map(|_| propose_easy(&mut easy_rng)).collect();
        assert_eq!(proposals, expected);

        let distinct: HashSet<Coordinate> = proposals.iter().copied().collect();
        assert!(distinct.len() >= 6, "only {:?}", distinct);
        assert!(proposals.iter().any(|c| !board.is_available(*c)));
        assert!(proposals.iter().any(|c| board.is_available(*c)));
    }

    #[test]
    fn test_never_proposes_occupied_cell_when_a_rule_fires() {
        for (board, expected) in [
            ("XX-/-O-/---", Coordinate::TOP_RIGHT),
            ("OX-/XO-/---", Coordinate::BOTTOM_RIGHT),
            ("---/-O-/-X-", Coordinate::TOP_LEFT),
        ] {
            let parsed: Board = board.parse().unwrap();
            let coord = propose(board, 9);
            assert_eq!(coord, expected);
            assert!(parsed.is_available(coord));
        }
    }
}

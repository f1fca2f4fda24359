//! Pure tic-tac-toe game logic with a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s addressed by [`Coordinate`] (x = column, y = row)
//! - **Rules**: win, draw and whole-board [`Outcome`] evaluation, move validation
//! - **Strategies**: [`EasyStrategy`] (random) and [`HardStrategy`] (prioritized rules)
//! - **Session**: [`GameSession`] alternates turns and stops at the first win or draw
//!
//! No I/O happens here. Randomness is always supplied by the caller.
//!
//! # Example
//!
//! ```
//! use gridduel_core::{Coordinate, Difficulty, FirstPlayer, GameSession, SessionState};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut game = GameSession::new(Difficulty::Hard, FirstPlayer::Human, StdRng::seed_from_u64(7));
//! game.play_player("0,0".parse::<Coordinate>().unwrap()).unwrap();
//! assert_eq!(game.play_computer(), Ok(Coordinate::CENTER));
//! assert_eq!(game.state(), SessionState::AwaitingPlayerMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod session;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use position::{Coordinate, OutOfRange, ParseCoordinateError};
pub use rules::{LINES, Outcome, WinningLine, evaluate};
pub use session::{FirstPlayer, GameSession, SessionState};
pub use strategy::{Difficulty, EasyStrategy, HardStrategy, Strategy};
pub use types::{Board, Cell, Mark, ParseBoardError};

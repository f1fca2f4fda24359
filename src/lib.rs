//! Console tic-tac-toe against a computer opponent.
//!
//! The game rules and the opponent live in [`gridduel_core`]; this crate adds
//! configuration and a line-based console that drives a
//! [`GameSession`] from any reader and writer.
//!
//! # Example
//!
//! ```
//! use gridduel::{Console, Difficulty, FirstPlayer, GameSession, Mark, Outcome};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = GameSession::new(Difficulty::Hard, FirstPlayer::Human, StdRng::seed_from_u64(0));
//! let mut output = Vec::new();
//! let mut console = Console::new(Cursor::new("0,0\n2,2\n0,2\n0,1\n"), &mut output);
//! assert_eq!(console.run(&mut session)?, Outcome::Win(Mark::Player));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, prompt_coordinate, prompt_line};

pub use gridduel_core::{
    Board, Cell, Coordinate, Difficulty, FirstPlayer, GameSession, Mark, MoveError, Outcome,
    SessionState,
};

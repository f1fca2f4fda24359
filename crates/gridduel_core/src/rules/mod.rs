//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state, so the session and the strategies can share them freely.

pub mod draw;
pub mod outcome;
pub mod validate;
pub mod win;

pub use draw::is_draw;
pub use outcome::{Outcome, evaluate};
pub use validate::validate_move;
pub use win::{LINES, WinningLine, check_winner};

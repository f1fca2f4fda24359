//! A single human-versus-computer game.
//!
//! The session owns the board and the random generator. It alternates
//! turns, validates placements, runs the computer's propose-and-retry loop
//! and stops at the first win or draw.

use crate::action::{Move, MoveError};
use crate::position::Coordinate;
use crate::rules::{Outcome, evaluate, validate_move};
use crate::strategy::Difficulty;
use crate::types::{Board, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Who places the first mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting on the human.
    AwaitingPlayerMove,
    /// Waiting on the computer.
    AwaitingComputerMove,
    /// A line was completed. Terminal.
    Won(Mark),
    /// The board filled without a line. Terminal.
    Drawn,
}

impl SessionState {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Won(_) | SessionState::Drawn)
    }

    fn awaiting(mark: Mark) -> Self {
        match mark {
            Mark::Player => SessionState::AwaitingPlayerMove,
            Mark::Opponent => SessionState::AwaitingComputerMove,
        }
    }
}

/// One game from empty board to win or draw.
#[derive(Debug, Clone)]
pub struct GameSession<R> {
    board: Board,
    difficulty: Difficulty,
    state: SessionState,
    history: Vec<Move>,
    rng: R,
}

impl<R: RngCore> GameSession<R> {
    /// Starts a session on an empty board.
    #[instrument(skip(rng))]
    pub fn new(difficulty: Difficulty, first_player: FirstPlayer, rng: R) -> Self {
        info!("Starting game session");
        let state = match first_player {
            FirstPlayer::Human => SessionState::AwaitingPlayerMove,
            FirstPlayer::Computer => SessionState::AwaitingComputerMove,
        };
        Self {
            board: Board::new(),
            difficulty,
            state,
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the difficulty fixed at session start.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Places the human's mark.
    ///
    /// An occupied cell leaves the session untouched so the caller can ask
    /// again.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play_player(&mut self, coord: Coordinate) -> Result<SessionState, MoveError> {
        self.ensure_turn(Mark::Player)?;
        validate_move(&self.board, coord)?;
        self.apply(Move::new(Mark::Player, coord));
        Ok(self.state)
    }

    /// Lets the computer move.
    ///
    /// Proposals are drawn from the session's strategy until one lands on
    /// an empty cell. Returns the coordinate that was played.
    #[instrument(skip(self), fields(state = ?self.state, difficulty = %self.difficulty))]
    pub fn play_computer(&mut self) -> Result<Coordinate, MoveError> {
        self.ensure_turn(Mark::Opponent)?;
        let strategy = self.difficulty.strategy();
        let coord = loop {
            let proposal = strategy.propose(&self.board, &mut self.rng);
            if validate_move(&self.board, proposal).is_ok() {
                break proposal;
            }
            trace!(%proposal, strategy = strategy.name(), "Proposal occupied, retrying");
        };
        self.apply(Move::new(Mark::Opponent, coord));
        Ok(coord)
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), MoveError> {
        match self.state {
            SessionState::Won(_) | SessionState::Drawn => Err(MoveError::GameOver),
            state if state == SessionState::awaiting(mark) => Ok(()),
            _ => Err(MoveError::NotYourTurn(mark)),
        }
    }

    fn apply(&mut self, mov: Move) {
        self.board.place(mov.coord, mov.mark);
        self.history.push(mov);
        self.state = match evaluate(&self.board) {
            Outcome::Win(mark) => SessionState::Won(mark),
            Outcome::Draw => SessionState::Drawn,
            Outcome::Undecided => SessionState::awaiting(mov.mark.opponent()),
        };
        debug!(%mov, state = ?self.state, "Move applied");
        if self.state.is_terminal() {
            info!(state = ?self.state, moves = self.history.len(), "Game over");
        }
    }
}

//! Console front-end: prompts, rendering and the turn loop.

mod input;

pub use input::{prompt_coordinate, prompt_line};

use anyhow::Result;
use gridduel_core::{Difficulty, GameSession, Mark, MoveError, Outcome, SessionState};
use rand::RngCore;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Plays sessions over a line-based reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks once for the opponent strength.
    #[instrument(skip(self))]
    pub fn choose_difficulty(&mut self) -> Result<Difficulty> {
        let answer = prompt_line(&mut self.input, &mut self.output, "Difficulty (hard or easy): ")?;
        let difficulty = Difficulty::from_selection(&answer);
        info!(%difficulty, "Difficulty selected");
        Ok(difficulty)
    }

    /// Runs the session to its end and returns the final outcome.
    ///
    /// Bad or occupied coordinates are reported and asked for again.
    #[instrument(skip_all, fields(difficulty = %session.difficulty()))]
    pub fn run<G: RngCore>(&mut self, session: &mut GameSession<G>) -> Result<Outcome> {
        loop {
            match session.state() {
                SessionState::AwaitingPlayerMove => {
                    let coord = prompt_coordinate(&mut self.input, &mut self.output)?;
                    match session.play_player(coord) {
                        Ok(_) => debug!(%coord, "Player moved"),
                        Err(MoveError::OccupiedCell(_)) => writeln!(self.output, "Spot already used")?,
                        Err(e) => return Err(e.into()),
                    }
                }
                SessionState::AwaitingComputerMove => {
                    let coord = session.play_computer()?;
                    if session.difficulty() == Difficulty::Hard {
                        writeln!(self.output, "{}", coord)?;
                    }
                    if !session.state().is_terminal() {
                        writeln!(self.output, "{}", session.board())?;
                    }
                }
                SessionState::Won(_) | SessionState::Drawn => {
                    writeln!(self.output, "{}", session.board())?;
                    let message = match session.outcome().winner() {
                        Some(Mark::Player) => "player wins!",
                        Some(Mark::Opponent) => "PC wins",
                        None => "Draw",
                    };
                    writeln!(self.output, "{}", message)?;
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(session.outcome())
    }
}

//! Text interface for playing against the engine.
//!
//! Input is read line by line from any [`BufRead`] and output goes to any
//! [`Write`], so sessions can be driven from tests as well as a terminal.
//! Moves are entered as two digits, row first, both 1-based: `11` is the
//! top-left corner. Malformed or illegal input is reported and asked for again;
//! it never reaches the engine.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use thiserror::Error;

use crate::board::{Board, Cell, Point, Side};
use crate::constants::N;
use crate::engine::{Engine, Strategy};
use crate::game::{GameOutcome, GameState};
use crate::movegen::LegalOverlay;

/// Rejected text input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two digits, row then column, such as 11")]
    Format,
    #[error("rows and columns are numbered from 1")]
    Zero,
    #[error("expected 1, 2 or 3")]
    BadChoice,
}

/// Parse `RC` input (1-based digits) into a 0-based point.
///
/// Digits past the board size are passed through; the game reports them as
/// out of range.
pub fn parse_coord(input: &str) -> Result<Point, InputError> {
    let mut digits = input.trim().chars();
    let (Some(r), Some(c)) = (digits.next(), digits.next()) else {
        return Err(InputError::Format);
    };
    let (Some(row), Some(col)) = (r.to_digit(10), c.to_digit(10)) else {
        return Err(InputError::Format);
    };
    if row == 0 || col == 0 {
        return Err(InputError::Zero);
    }
    Ok((row as usize - 1, col as usize - 1))
}

/// Draw `board` with 1-based headers, marking the overlay's squares with `*`.
pub fn render(board: &Board, overlay: Option<&LegalOverlay>) -> String {
    let rule = "-".repeat(20);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str("  ");
    for col in 1..=N {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');
    for row in 0..N {
        out.push_str(&format!("{} |", row + 1));
        for col in 0..N {
            let ch = match board.get(row, col) {
                Some(Cell::Black) => 'B',
                Some(Cell::White) => 'W',
                _ if overlay.is_some_and(|o| o.is_marked(row, col)) => '*',
                _ => ' ',
            };
            out.push(ch);
            out.push('|');
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Board plus coin counts, as shown after every move.
pub fn render_state(state: &GameState) -> String {
    format!(
        "{}Current count for Black tokens: {}\nCurrent count for White tokens: {}\n",
        render(state.board(), None),
        state.count(Side::Black),
        state.count(Side::White)
    )
}

/// What to run, as picked from the start-up menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Human plays Black against this strategy
    HumanVs(Strategy),
    /// Heuristic (Black) against Monte Carlo (White)
    AiVsAi,
}

const MENU: &str = "How do you like to play?
1. human vs AI (Monte Carlo) - human takes Black and goes first
2. human vs AI (heuristic) - human takes Black and goes first
3. AI (heuristic, Black) vs AI (Monte Carlo, White)
Enter 1, 2 or 3";

/// Show the mode menu and read the answer.
pub fn choose_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Mode> {
    writeln!(output, "{MENU}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read menu choice")? == 0 {
        bail!("input closed before a mode was chosen");
    }
    match line.trim() {
        "1" => Ok(Mode::HumanVs(Strategy::MonteCarlo)),
        "2" => Ok(Mode::HumanVs(Strategy::Heuristic)),
        "3" => Ok(Mode::AiVsAi),
        _ => Err(InputError::BadChoice.into()),
    }
}

/// A game between a human at the keyboard (Black) and the engine (White).
pub struct HumanSession<R, W> {
    input: R,
    output: W,
    engine: Engine,
    ai: Strategy,
}

impl<R: BufRead, W: Write> HumanSession<R, W> {
    pub fn new(input: R, output: W, engine: Engine, ai: Strategy) -> Self {
        Self {
            input,
            output,
            engine,
            ai,
        }
    }

    /// Play a full game and return its outcome.
    pub fn run(&mut self) -> Result<GameOutcome> {
        let human = Side::Black;
        let mut state = GameState::new();

        loop {
            let outcome = state.outcome();
            if outcome.is_over() {
                write!(self.output, "{}", render_state(&state))?;
                let message = match outcome {
                    GameOutcome::Win(side) if side == human => "The winner is the Human",
                    GameOutcome::Win(_) => "The winner is AI",
                    _ => "It's a draw",
                };
                writeln!(self.output, "{message}")?;
                self.output.flush()?;
                return Ok(outcome);
            }

            if state.side_to_move() == human {
                if !state.has_legal_move() {
                    writeln!(self.output, "You have no legal move, passing.")?;
                    state = state.pass();
                    continue;
                }
                writeln!(self.output, "Player making a move: ")?;
                state = self.read_move(&state)?;
            } else {
                writeln!(self.output, "{} AI making a move", self.ai)?;
                state = self.engine.play_turn(&state, self.ai);
            }
            write!(self.output, "{}", render_state(&state))?;
            writeln!(self.output)?;
        }
    }

    /// Prompt until a legal move is entered.
    fn read_move(&mut self, state: &GameState) -> Result<GameState> {
        let overlay = state.legal_overlay();
        loop {
            write!(self.output, "{}", render(state.board(), Some(&overlay)))?;
            writeln!(
                self.output,
                "Please enter your move, row number first, then column number, such as 11 for first row, first column, no space pls:"
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("failed to read move")? == 0 {
                bail!("input closed during the game");
            }

            let (row, col) = match parse_coord(&line) {
                Ok(pt) => pt,
                Err(e) => {
                    writeln!(self.output, "Invalid input format, please try again. ({e})")?;
                    continue;
                }
            };
            match state.apply_human_move(row, col) {
                Ok(next) => return Ok(next),
                Err(e) => writeln!(self.output, "Invalid input, please try again. ({e})")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("11"), Ok((0, 0)));
        assert_eq!(parse_coord(" 35\n"), Ok((2, 4)));
        assert_eq!(parse_coord("88"), Ok((7, 7)));
        assert_eq!(parse_coord("99"), Ok((8, 8)));
    }

    #[test]
    fn test_parse_coord_errors() {
        assert_eq!(parse_coord(""), Err(InputError::Format));
        assert_eq!(parse_coord("3"), Err(InputError::Format));
        assert_eq!(parse_coord("a1"), Err(InputError::Format));
        assert_eq!(parse_coord("3 5"), Err(InputError::Format));
        assert_eq!(parse_coord("03"), Err(InputError::Zero));
    }

    #[test]
    fn test_render_marks_legal_squares() {
        let state = GameState::new();
        let text = render(state.board(), Some(&state.legal_overlay()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   1 2 3 4 5 6 7 8");
        assert_eq!(lines[4], "3 | | | | |*| | | |");
        assert_eq!(lines[5], "4 | | | |B|W|*| | |");
        assert_eq!(lines[6], "5 | | |*|W|B| | | |");
    }

    #[test]
    fn test_choose_mode() {
        let mut out = Vec::new();
        assert_eq!(
            choose_mode(&mut "1\n".as_bytes(), &mut out).unwrap(),
            Mode::HumanVs(Strategy::MonteCarlo)
        );
        assert_eq!(
            choose_mode(&mut "2\n".as_bytes(), &mut out).unwrap(),
            Mode::HumanVs(Strategy::Heuristic)
        );
        assert_eq!(choose_mode(&mut "3".as_bytes(), &mut out).unwrap(), Mode::AiVsAi);
        assert!(choose_mode(&mut "7\n".as_bytes(), &mut out).is_err());
        assert!(choose_mode(&mut "".as_bytes(), &mut out).is_err());
    }

    #[test]
    fn test_session_reprompts_on_bad_input() {
        let engine = Engine::new(EngineConfig {
            playouts: 2,
            time_limit: None,
            seed: Some(1),
        });
        // garbage, occupied cell, illegal empty cell, then input ends
        let input = "xy\n44\n11\n".as_bytes();
        let mut output = Vec::new();
        let mut session = HumanSession::new(input, &mut output, engine, Strategy::Heuristic);
        assert!(session.run().is_err());

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input format").count(), 1);
        assert_eq!(text.matches("Invalid input, please try again").count(), 2);
    }

    #[test]
    fn test_session_plays_ai_reply() {
        let engine = Engine::new(EngineConfig {
            playouts: 2,
            time_limit: None,
            seed: Some(1),
        });
        let input = "35\n".as_bytes();
        let mut output = Vec::new();
        let mut session = HumanSession::new(input, &mut output, engine, Strategy::Heuristic);
        assert!(session.run().is_err());

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Heuristic AI making a move"));
        assert!(text.contains("Current count for Black tokens: 4"));
    }
}

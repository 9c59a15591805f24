//! AI vs AI competition.
//!
//! Plays complete games between two strategies and tallies the results. The
//! default pairing is the heuristic player as Black (moving first) against the
//! Monte Carlo player as White.

use std::fmt;

use tracing::info;

use crate::board::Side;
use crate::engine::{Engine, Strategy};
use crate::game::{GameOutcome, GameState};

/// Results of a series of games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaReport {
    pub black: Strategy,
    pub white: Strategy,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl ArenaReport {
    pub fn new(black: Strategy, white: Strategy) -> Self {
        Self {
            black,
            white,
            black_wins: 0,
            white_wins: 0,
            draws: 0,
        }
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Side::Black) => self.black_wins += 1,
            GameOutcome::Win(Side::White) => self.white_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (Black) wins: {} times", self.black, self.black_wins)?;
        writeln!(f, "{} (White) wins: {} times", self.white, self.white_wins)?;
        write!(f, "Draw: {} times", self.draws)
    }
}

/// Play one game to the end and return the final state.
pub fn play_game(engine: &mut Engine, black: Strategy, white: Strategy) -> GameState {
    let mut state = GameState::new();
    while !state.outcome().is_over() {
        let strategy = match state.side_to_move() {
            Side::Black => black,
            Side::White => white,
        };
        state = engine.play_turn(&state, strategy);
    }
    state
}

/// Play `rounds` games and tally the winners.
pub fn run_competition(
    engine: &mut Engine,
    rounds: usize,
    black: Strategy,
    white: Strategy,
) -> ArenaReport {
    let mut report = ArenaReport::new(black, white);
    for round in 1..=rounds {
        let state = play_game(engine, black, white);
        let outcome = state.outcome();
        let winner = match outcome {
            GameOutcome::Win(Side::Black) => format!("{black} (Black)"),
            GameOutcome::Win(Side::White) => format!("{white} (White)"),
            _ => "draw".to_string(),
        };
        info!(
            round,
            black_coins = state.count(Side::Black),
            white_coins = state.count(Side::White),
            %winner,
            "game finished"
        );
        report.record(outcome);
    }
    report
}

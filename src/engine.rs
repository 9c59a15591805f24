//! The AI player facade.
//!
//! [`Engine`] owns the random source and the search budget and dispatches to
//! one of the two strategies. It is the only thing the interactive layer and
//! the arena need to ask for a move.

use std::time::Duration;

use clap::ValueEnum;
use tracing::info;

use crate::constants::DEFAULT_PLAYOUTS;
use crate::game::GameState;
use crate::heuristic;
use crate::mcts::{self, MonteCarloConfig};
use crate::movegen::Move;

/// Move selection strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Flat Monte Carlo: random playouts per candidate
    #[value(name = "mc", alias = "monte-carlo")]
    MonteCarlo,
    /// Positional weights, then maximal flips in the endgame
    Heuristic,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::MonteCarlo => write!(f, "Monte Carlo"),
            Strategy::Heuristic => write!(f, "Heuristic"),
        }
    }
}

/// Runtime engine settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Playouts per candidate for the Monte Carlo strategy
    pub playouts: usize,
    /// Optional wall-clock limit per Monte Carlo search
    pub time_limit: Option<Duration>,
    /// Seed for the random source; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playouts: DEFAULT_PLAYOUTS,
            time_limit: None,
            seed: None,
        }
    }
}

pub struct Engine {
    mc: MonteCarloConfig,
    rng: fastrand::Rng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            mc: MonteCarloConfig {
                playouts: config.playouts,
                time_limit: config.time_limit,
            },
            rng,
        }
    }

    /// Choose a move for the side to move in `state`.
    ///
    /// Returns `None` if that side has no legal move. A forced move is
    /// returned without any scoring.
    pub fn select_move(&mut self, state: &GameState, strategy: Strategy) -> Option<Move> {
        let board = state.board();
        let side = state.side_to_move();
        match strategy {
            Strategy::MonteCarlo => mcts::select_move(board, side, &self.mc, &mut self.rng),
            Strategy::Heuristic => heuristic::select_move(board, side, state.empty_cells()),
        }
    }

    /// Let `strategy` play one half-turn: its chosen move, or a pass if it has none.
    pub fn play_turn(&mut self, state: &GameState, strategy: Strategy) -> GameState {
        match self.select_move(state, strategy) {
            Some(mv) => {
                info!(
                    side = %state.side_to_move(),
                    %strategy,
                    point = ?mv.point(),
                    flips = mv.flips().len(),
                    "AI move"
                );
                state.apply_move(&mv)
            }
            None => {
                info!(side = %state.side_to_move(), %strategy, "no legal move, passing");
                state.pass()
            }
        }
    }
}

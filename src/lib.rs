//! Reversi-MC: a Reversi/Othello engine with two AI players.
//!
//! The engine plays on the standard 8x8 board and offers a flat Monte Carlo
//! player, which scores each legal move by random playouts, and a heuristic
//! player, which uses a positional weight table and switches to maximal flips
//! in the endgame.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, weight table and engine defaults
//! - [`board`] - Cells, sides and the 8x8 board
//! - [`movegen`] - Legal move generation with flip sets
//! - [`game`] - Move application, turn order and game end
//! - [`playout`] - Random game simulation
//! - [`mcts`] - Monte Carlo move selection
//! - [`heuristic`] - Positional / maximal-flip move selection
//! - [`engine`] - Strategy dispatch and random source
//! - [`cli`] - Text interface for a human player
//! - [`arena`] - AI vs AI competition
//!
//! ## Example
//!
//! ```
//! use reversi_mc::engine::{Engine, EngineConfig, Strategy};
//! use reversi_mc::game::GameState;
//!
//! // A new game, Black to move
//! let state = GameState::new();
//! let state = state.apply_human_move(2, 4).unwrap();
//!
//! // Let the Monte Carlo AI answer for White
//! let mut engine = Engine::new(EngineConfig { playouts: 50, seed: Some(1), ..Default::default() });
//! let reply = engine.select_move(&state, Strategy::MonteCarlo).unwrap();
//! let state = state.apply_move(&reply);
//! println!("White played {:?}", reply.point());
//! ```

pub mod arena;
pub mod board;
pub mod cli;
pub mod constants;
pub mod engine;
pub mod game;
pub mod heuristic;
pub mod mcts;
pub mod movegen;
pub mod playout;

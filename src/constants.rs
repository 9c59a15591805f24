//! Constants for board geometry, the positional weight table, and engine defaults.
//!
//! Everything here is fixed at compile time. Runtime overrides (playout budget,
//! seed, time limit, arena rounds) come from the command line and are collected
//! into [`crate::engine::EngineConfig`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Reversi is always played on 8x8.
pub const N: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Offsets (row, col) to the 8 neighbouring cells.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of random playouts per candidate move.
pub const DEFAULT_PLAYOUTS: usize = 10_000;

// =============================================================================
// Heuristic Parameters
// =============================================================================

/// At or below this many empty cells the heuristic player switches from
/// positional scoring to maximal-flip scoring.
pub const ENDGAME_EMPTY_CELLS: usize = 25;

/// Positional weights, indexed `[row][col]`.
///
/// Corners are worth the most; the cells touching a corner are penalised since
/// taking them tends to hand the corner to the opponent.
pub const WEIGHTS: [[i32; N]; N] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [-1, -1, -1, -1, -1, -1, -2, 5],
    [-1, -1, -1, -1, -1, -1, -2, 10],
    [-1, -1, -1, -1, -1, -1, -50, -20],
    [100, -1, -1, -1, -1, -1, -20, 100],
];

// =============================================================================
// Arena
// =============================================================================

/// Default number of games in an AI vs AI competition.
pub const DEFAULT_ROUNDS: usize = 100;

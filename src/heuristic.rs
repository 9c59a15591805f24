//! Heuristic move selection.
//!
//! Two scoring rules, switched on the number of empty cells left:
//!
//! - **Positional** (more than [`ENDGAME_EMPTY_CELLS`] empty): sum the
//!   [`WEIGHTS`] of every cell the mover would own after the move, minus the
//!   weights of the cells the opponent holds before it. Flipped cells are
//!   counted on both sides of that sum; the opponent's position is not
//!   recomputed after the move.
//! - **Maximal flip** (otherwise): the move that gains the most cells.
//!
//! In both phases the first candidate with the strictly greatest score wins.

use tracing::debug;

use crate::board::{Board, Cell, Side};
use crate::constants::{ENDGAME_EMPTY_CELLS, WEIGHTS};
use crate::movegen::{legal_moves, Move};

/// Which scoring rule is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Positional,
    MaxFlip,
}

impl Phase {
    pub fn for_empty_cells(empty_cells: usize) -> Self {
        if empty_cells > ENDGAME_EMPTY_CELLS {
            Phase::Positional
        } else {
            Phase::MaxFlip
        }
    }
}

#[inline]
fn weight((row, col): (usize, usize)) -> i32 {
    WEIGHTS[row][col]
}

/// Positional score of `mv` for `side` on the pre-move `board`.
pub fn positional_score(board: &Board, side: Side, mv: &Move) -> i32 {
    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());

    let gained: i32 = mv.occupied().map(weight).sum();
    let held: i32 = Board::points()
        .filter(|&pt| board.at(pt) == own)
        .map(weight)
        .sum();
    let opposed: i32 = Board::points()
        .filter(|&pt| board.at(pt) == opp)
        .map(weight)
        .sum();

    gained + held - opposed
}

/// Endgame score: placed plus flipped cells.
#[inline]
pub fn flip_score(mv: &Move) -> i32 {
    mv.gain() as i32
}

/// First move with the strictly greatest `score`.
fn first_best(moves: Vec<Move>, mut score: impl FnMut(&Move) -> i32) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let s = score(&mv);
        debug!(point = ?mv.point(), score = s, "heuristic candidate");
        if best.as_ref().is_none_or(|(_, b)| s > *b) {
            best = Some((mv, s));
        }
    }
    best.map(|(mv, _)| mv)
}

/// Pick a move for `side`, or `None` if it has no legal move.
pub fn select_move(board: &Board, side: Side, empty_cells_remaining: usize) -> Option<Move> {
    let moves = legal_moves(board, side);
    match Phase::for_empty_cells(empty_cells_remaining) {
        Phase::Positional => first_best(moves, |mv| positional_score(board, side, mv)),
        Phase::MaxFlip => first_best(moves, flip_score),
    }
}

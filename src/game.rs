//! Game state: move application, turn order and end-of-game detection.
//!
//! The free functions operate on a bare [`Board`] and are what the searches
//! use on their private clones. [`GameState`] wraps a board with the side to
//! move and is the value the caller threads through a game: every operation
//! takes a state and returns the next one.

use thiserror::Error;

use crate::board::{Board, Cell, Side};
use crate::movegen::{has_legal_move, legal_moves, move_at, LegalOverlay, Move};

/// Why a requested placement was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate is not on the board
    #[error("({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
    /// Cell is occupied or flips nothing
    #[error("({row}, {col}) is not a legal move for {side}")]
    IllegalMove { row: usize, col: usize, side: Side },
}

/// State of a game with respect to its end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Place `mv` for `side`: the placement cell and every flipped cell become `side`.
pub fn apply_move(board: &mut Board, side: Side, mv: &Move) {
    let cell = Cell::from(side);
    for pt in mv.occupied() {
        board.put(pt, cell);
    }
}

/// Number of cells holding `cell`.
#[inline]
pub fn count_cells(board: &Board, cell: Cell) -> usize {
    board.count(cell)
}

/// Decide whether the game on `board` is over and who won.
///
/// The game ends when the board is full or when neither side can move.
/// The side with strictly more stones wins; equal counts are a draw.
pub fn outcome(board: &Board) -> GameOutcome {
    let ended = board.is_full()
        || (!has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White));
    if !ended {
        return GameOutcome::InProgress;
    }

    let black = count_cells(board, Cell::Black);
    let white = count_cells(board, Cell::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::Win(Side::Black),
        std::cmp::Ordering::Less => GameOutcome::Win(Side::White),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}

#[inline]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_over()
}

/// A board together with the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Side,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game: initial layout, Black to move.
    pub fn new() -> Self {
        Self::from_parts(Board::initial(), Side::Black)
    }

    /// A state built from an arbitrary board, e.g. a test position.
    pub fn from_parts(board: Board, to_move: Side) -> Self {
        Self { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    /// Board snapshot accessor for rendering.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Coin count for `side`.
    pub fn count(&self, side: Side) -> usize {
        count_cells(&self.board, Cell::from(side))
    }

    pub fn empty_cells(&self) -> usize {
        self.board.empty_cells()
    }

    /// Legal moves for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    pub fn has_legal_move(&self) -> bool {
        has_legal_move(&self.board, self.to_move)
    }

    /// Legal landing squares for the side to move.
    pub fn legal_overlay(&self) -> LegalOverlay {
        LegalOverlay::new(&self.legal_moves())
    }

    /// Play `mv` for the side to move and hand the turn to the opponent.
    ///
    /// `mv` must have been generated for this state.
    pub fn apply_move(&self, mv: &Move) -> GameState {
        let mut board = self.board;
        apply_move(&mut board, self.to_move, mv);
        GameState {
            board,
            to_move: self.to_move.opponent(),
        }
    }

    /// Hand the turn to the opponent without touching the board.
    pub fn pass(&self) -> GameState {
        GameState {
            board: self.board,
            to_move: self.to_move.opponent(),
        }
    }

    /// Validate and play a placement chosen from outside the engine.
    pub fn apply_human_move(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.board.get(row, col).is_none() {
            return Err(MoveError::OutOfRange { row, col });
        }
        let mv = move_at(&self.board, self.to_move, (row, col)).ok_or(MoveError::IllegalMove {
            row,
            col,
            side: self.to_move,
        })?;
        Ok(self.apply_move(&mv))
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }
}

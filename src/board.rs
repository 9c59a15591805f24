//! The 8x8 Reversi board.
//!
//! A [`Board`] is plain data: a row-major array of [`Cell`]s. It knows nothing
//! about whose turn it is or which moves are legal; see [`crate::movegen`] and
//! [`crate::game`] for that.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{CELLS, N};
use crate::game::MoveError;

/// A player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Contents of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl From<Side> for Cell {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

/// A (row, col) coordinate, both 0-based.
pub type Point = (usize, usize);

/// Whether `(row, col)` lies on the board.
#[inline]
pub fn valid_index(row: usize, col: usize) -> bool {
    row < N && col < N
}

/// The neighbour of `pt` one step in direction `(dr, dc)`, or `None` past the edge.
#[inline]
pub fn offset(pt: Point, (dr, dc): (isize, isize)) -> Option<Point> {
    let row = pt.0.checked_add_signed(dr)?;
    let col = pt.1.checked_add_signed(dc)?;
    valid_index(row, col).then_some((row, col))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// The standard starting layout: Black on (3,3) and (4,4), White on (3,4) and (4,3).
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.put((3, 3), Cell::Black);
        board.put((4, 4), Cell::Black);
        board.put((3, 4), Cell::White);
        board.put((4, 3), Cell::White);
        board
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// The cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if !valid_index(row, col) {
            return None;
        }
        Some(self.cells[Self::idx(row, col)])
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        if !valid_index(row, col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        self.cells[Self::idx(row, col)] = cell;
        Ok(())
    }

    /// Unchecked lookup for points already known to be on the board.
    #[inline]
    pub(crate) fn at(&self, pt: Point) -> Cell {
        self.cells[Self::idx(pt.0, pt.1)]
    }

    #[inline]
    pub(crate) fn put(&mut self, pt: Point, cell: Cell) {
        self.cells[Self::idx(pt.0, pt.1)] = cell;
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn empty_cells(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// All points in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                write!(f, "{} ", self.at((row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Failure to read a board from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("unexpected character {0:?} in board text")]
    BadSymbol(char),
    #[error("expected {expected} cells, found {found}")]
    WrongSize { expected: usize, found: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the text form produced by `Display`.
    ///
    /// Whitespace is ignored. `B`/`X` is Black, `W`/`O` is White, `.`/`-` is empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut found = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'B' | 'b' | 'X' | 'x' => Cell::Black,
                'W' | 'w' | 'O' | 'o' => Cell::White,
                '.' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::BadSymbol(other)),
            };
            if found < CELLS {
                board.cells[found] = cell;
            }
            found += 1;
        }
        if found != CELLS {
            return Err(ParseBoardError::WrongSize {
                expected: CELLS,
                found,
            });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_cells(), CELLS);
        assert!(!board.is_full());
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.get(3, 3), Some(Cell::Black));
        assert_eq!(board.get(4, 4), Some(Cell::Black));
        assert_eq!(board.get(3, 4), Some(Cell::White));
        assert_eq!(board.get(4, 3), Some(Cell::White));
        assert_eq!(board.count(Cell::Black), 2);
        assert_eq!(board.count(Cell::White), 2);
        assert_eq!(board.empty_cells(), CELLS - 4);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::empty();
        assert_eq!(board.get(8, 0), None);
        assert_eq!(board.get(0, 8), None);
        assert!(board.set(7, 7, Cell::White).is_ok());
        assert_eq!(board.get(7, 7), Some(Cell::White));
        assert_eq!(
            board.set(8, 2, Cell::Black),
            Err(MoveError::OutOfRange { row: 8, col: 2 })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::initial();
        let mut copy = board;
        copy.set(0, 0, Cell::Black).unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
        assert_ne!(board, copy);
    }

    #[test]
    fn test_offset_stops_at_edge() {
        assert_eq!(offset((0, 0), (-1, 0)), None);
        assert_eq!(offset((0, 0), (0, -1)), None);
        assert_eq!(offset((7, 7), (1, 1)), None);
        assert_eq!(offset((3, 3), (1, -1)), Some((4, 2)));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let board = Board::initial();
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, parsed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "B W .".parse::<Board>(),
            Err(ParseBoardError::WrongSize {
                expected: CELLS,
                found: 3
            })
        );
        assert_eq!(
            "?".parse::<Board>(),
            Err(ParseBoardError::BadSymbol('?'))
        );
    }
}

//! Legal move generation.
//!
//! A placement is legal when, in at least one of the 8 directions, it brackets
//! a contiguous run of opponent stones against one of the mover's own stones.
//! Every generated [`Move`] carries the full set of cells it flips, so applying
//! it never has to rescan the board.

use std::fmt;

use crate::board::{offset, Board, Cell, Point, Side};
use crate::constants::{CELLS, DIRECTIONS, N};

/// A legal placement together with the stones it flips.
///
/// The flip set is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    point: Point,
    flips: Vec<Point>,
}

impl Move {
    /// Where the stone is placed.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Opponent stones that change colour.
    #[inline]
    pub fn flips(&self) -> &[Point] {
        &self.flips
    }

    /// Number of cells the mover owns afterwards that it did not own before.
    #[inline]
    pub fn gain(&self) -> usize {
        1 + self.flips.len()
    }

    /// The placement followed by every flipped cell.
    pub fn occupied(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.point).chain(self.flips.iter().copied())
    }
}

/// Append to `out` the opponent stones bracketed from `from` in direction `dir`.
///
/// Leaves `out` untouched if the run is not closed by one of `side`'s stones.
fn collect_flips(board: &Board, side: Side, from: Point, dir: (isize, isize), out: &mut Vec<Point>) {
    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());
    let start = out.len();

    let mut cur = offset(from, dir);
    while let Some(pt) = cur {
        match board.at(pt) {
            c if c == opp => {
                out.push(pt);
                cur = offset(pt, dir);
            }
            c if c == own => return,
            _ => break,
        }
    }
    // Ran off the board or hit an empty cell.
    out.truncate(start);
}

/// Whether the run starting next to `from` in direction `dir` can be flipped.
fn brackets(board: &Board, side: Side, from: Point, dir: (isize, isize)) -> bool {
    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());

    let mut cur = offset(from, dir);
    let mut seen_opp = false;
    while let Some(pt) = cur {
        match board.at(pt) {
            c if c == opp => {
                seen_opp = true;
                cur = offset(pt, dir);
            }
            c if c == own => return seen_opp,
            _ => return false,
        }
    }
    false
}

/// The move `side` would make at `pt`, or `None` if the placement is not legal.
pub fn move_at(board: &Board, side: Side, pt: Point) -> Option<Move> {
    if board.get(pt.0, pt.1) != Some(Cell::Empty) {
        return None;
    }
    let mut flips = Vec::new();
    for dir in DIRECTIONS {
        collect_flips(board, side, pt, dir, &mut flips);
    }
    if flips.is_empty() {
        return None;
    }
    Some(Move { point: pt, flips })
}

/// All legal moves for `side`, in row-major order of their placement cell.
///
/// Search strategies break ties by taking the first best move, so this order
/// is part of the contract.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    Board::points()
        .filter_map(|pt| move_at(board, side, pt))
        .collect()
}

/// Whether `side` has at least one legal move. Cheaper than [`legal_moves`].
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Board::points().any(|pt| {
        board.at(pt) == Cell::Empty && DIRECTIONS.iter().any(|&dir| brackets(board, side, pt, dir))
    })
}

/// Marks the legal landing squares of one side, for display.
///
/// Kept apart from [`Board`] so candidate annotations never mix with stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalOverlay {
    marks: [bool; CELLS],
}

impl LegalOverlay {
    pub fn new(moves: &[Move]) -> Self {
        let mut marks = [false; CELLS];
        for mv in moves {
            let (row, col) = mv.point();
            marks[row * N + col] = true;
        }
        Self { marks }
    }

    /// Whether `(row, col)` is a legal landing square. False off the board.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        row < N && col < N && self.marks[row * N + col]
    }

    pub fn len(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for LegalOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let ch = if self.is_marked(row, col) { '*' } else { '.' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(moves: &[Move]) -> Vec<Point> {
        moves.iter().map(Move::point).collect()
    }

    #[test]
    fn test_initial_moves_for_black() {
        let moves = legal_moves(&Board::initial(), Side::Black);
        assert_eq!(points(&moves), vec![(2, 4), (3, 5), (4, 2), (5, 3)]);
        for mv in &moves {
            assert_eq!(mv.flips().len(), 1);
        }
        assert_eq!(moves[0].flips(), &[(3, 4)]);
    }

    #[test]
    fn test_initial_moves_for_white() {
        let moves = legal_moves(&Board::initial(), Side::White);
        assert_eq!(points(&moves), vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_no_moves_on_empty_board() {
        assert!(legal_moves(&Board::empty(), Side::Black).is_empty());
        assert!(!has_legal_move(&Board::empty(), Side::White));
    }

    #[test]
    fn test_run_off_edge_does_not_flip() {
        // The White run reaches the edge with no Black stone behind it.
        let mut board = Board::empty();
        board.set(0, 0, Cell::Black).unwrap();
        board.set(0, 6, Cell::White).unwrap();
        board.set(0, 7, Cell::White).unwrap();
        assert_eq!(move_at(&board, Side::Black, (0, 5)), None);
        assert!(!has_legal_move(&board, Side::Black));
    }

    #[test]
    fn test_gap_breaks_run() {
        let board: Board = "\
            B W . W . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . ."
            .parse()
            .unwrap();
        // Only the run to the left is closed by a Black stone.
        let mv = move_at(&board, Side::Black, (0, 2)).unwrap();
        assert_eq!(mv.flips(), &[(0, 1)]);
        assert_eq!(move_at(&board, Side::Black, (0, 4)), None);
    }

    #[test]
    fn test_multi_direction_flips() {
        let board: Board = "\
            B . B . . . . .
            W W . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . ."
            .parse()
            .unwrap();
        // (2,0) brackets (1,0) against (0,0) and (1,1) against (0,2).
        let mv = move_at(&board, Side::Black, (2, 0)).unwrap();
        assert_eq!(mv.flips(), &[(1, 0), (1, 1)]);
        assert_eq!(mv.gain(), 3);
        assert_eq!(
            mv.occupied().collect::<Vec<_>>(),
            vec![(2, 0), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_long_run_flips_all() {
        let board: Board = "\
            . W W W W W W B
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . ."
            .parse()
            .unwrap();
        let mv = move_at(&board, Side::Black, (0, 0)).unwrap();
        assert_eq!(mv.flips().len(), 6);
        assert!(move_at(&board, Side::White, (0, 0)).is_none());
    }

    #[test]
    fn test_occupied_cell_is_not_legal() {
        let board = Board::initial();
        assert_eq!(move_at(&board, Side::Black, (3, 4)), None);
        assert_eq!(move_at(&board, Side::Black, (9, 9)), None);
    }

    #[test]
    fn test_has_legal_move_agrees_with_legal_moves() {
        let board = Board::initial();
        for side in [Side::Black, Side::White] {
            assert_eq!(
                has_legal_move(&board, side),
                !legal_moves(&board, side).is_empty()
            );
        }
    }

    #[test]
    fn test_overlay_marks_legal_squares() {
        let moves = legal_moves(&Board::initial(), Side::Black);
        let overlay = LegalOverlay::new(&moves);
        assert_eq!(overlay.len(), 4);
        assert!(overlay.is_marked(2, 4));
        assert!(overlay.is_marked(5, 3));
        assert!(!overlay.is_marked(3, 3));
        assert!(!overlay.is_marked(8, 8));
    }
}

//! Monte Carlo playouts (random game simulation).
//!
//! A playout plays uniformly random legal moves until the game ends, then
//! reports the result from a fixed perspective. The random source is passed in
//! explicitly so a seeded generator replays the exact same game.

use crate::board::{Board, Side};
use crate::game::{apply_move, outcome, GameOutcome};
use crate::movegen::legal_moves;

/// Result of one playout, relative to the perspective side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayoutResult {
    Win,
    Loss,
    Draw,
}

impl PlayoutResult {
    fn from_outcome(outcome: GameOutcome, perspective: Side) -> Option<Self> {
        match outcome {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(PlayoutResult::Draw),
            GameOutcome::Win(side) if side == perspective => Some(PlayoutResult::Win),
            GameOutcome::Win(_) => Some(PlayoutResult::Loss),
        }
    }
}

/// Play random moves on `board` until the game ends.
///
/// `to_move` plays first. A side without legal moves passes. The board is
/// left in its final position.
pub fn playout(
    board: &mut Board,
    to_move: Side,
    perspective: Side,
    rng: &mut fastrand::Rng,
) -> PlayoutResult {
    let mut side = to_move;

    loop {
        if let Some(result) = PlayoutResult::from_outcome(outcome(board), perspective) {
            return result;
        }

        let moves = legal_moves(board, side);
        match moves.len() {
            0 => {} // pass
            1 => apply_move(board, side, &moves[0]),
            n => apply_move(board, side, &moves[rng.usize(..n)]),
        }
        side = side.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_playout_reaches_terminal() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut board = Board::initial();
        let result = playout(&mut board, Side::Black, Side::Black, &mut rng);
        let final_outcome = outcome(&board);
        assert!(final_outcome.is_over());
        assert_eq!(
            PlayoutResult::from_outcome(final_outcome, Side::Black),
            Some(result)
        );
    }

    #[test]
    fn test_playout_is_deterministic_for_seed() {
        let mut a = Board::initial();
        let mut b = Board::initial();
        let ra = playout(&mut a, Side::Black, Side::White, &mut fastrand::Rng::with_seed(42));
        let rb = playout(&mut b, Side::Black, Side::White, &mut fastrand::Rng::with_seed(42));
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_playout_on_finished_board() {
        let mut board = Board::empty();
        board.set(0, 0, Cell::White).unwrap();
        let before = board;
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(
            playout(&mut board, Side::Black, Side::Black, &mut rng),
            PlayoutResult::Loss
        );
        assert_eq!(
            playout(&mut board, Side::Black, Side::White, &mut rng),
            PlayoutResult::Win
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_perspective_flips_result() {
        let mut a = Board::initial();
        let mut b = Board::initial();
        let as_black = playout(&mut a, Side::Black, Side::Black, &mut fastrand::Rng::with_seed(3));
        let as_white = playout(&mut b, Side::Black, Side::White, &mut fastrand::Rng::with_seed(3));
        match as_black {
            PlayoutResult::Win => assert_eq!(as_white, PlayoutResult::Loss),
            PlayoutResult::Loss => assert_eq!(as_white, PlayoutResult::Win),
            PlayoutResult::Draw => assert_eq!(as_white, PlayoutResult::Draw),
        }
    }
}

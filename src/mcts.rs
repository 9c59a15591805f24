//! Flat Monte Carlo move selection.
//!
//! Every legal move of the searching side is tried on a clone of the board and
//! then evaluated by a fixed number of random playouts with the opponent to
//! move. A candidate scores `wins + draws - losses` from the searching side's
//! point of view and the highest score wins; ties go to the earliest candidate
//! in generation order.
//!
//! Nothing is cached between calls: each search starts from scratch.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::{Board, Side};
use crate::constants::DEFAULT_PLAYOUTS;
use crate::game::apply_move;
use crate::movegen::{legal_moves, Move};
use crate::playout::{playout, PlayoutResult};

/// Search budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Playouts per candidate move
    pub playouts: usize,
    /// Optional wall-clock limit for a whole search, shared evenly by the candidates
    pub time_limit: Option<Duration>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            playouts: DEFAULT_PLAYOUTS,
            time_limit: None,
        }
    }
}

/// Playout tallies for one candidate move.
#[derive(Clone, Debug)]
pub struct CandidateStats {
    pub mv: Move,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl CandidateStats {
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    fn record(&mut self, result: PlayoutResult) {
        match result {
            PlayoutResult::Win => self.wins += 1,
            PlayoutResult::Loss => self.losses += 1,
            PlayoutResult::Draw => self.draws += 1,
        }
    }

    /// Number of playouts run for this candidate.
    #[inline]
    pub fn playouts(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Wins plus draws minus losses.
    #[inline]
    pub fn score(&self) -> i64 {
        i64::from(self.wins) + i64::from(self.draws) - i64::from(self.losses)
    }

    /// Fraction of playouts won, or -0.1 if none were run.
    pub fn winrate(&self) -> f64 {
        match self.playouts() {
            0 => -0.1,
            n => f64::from(self.wins) / f64::from(n),
        }
    }
}

/// Run the playouts for each of `moves` and return their tallies in the same order.
fn evaluate(
    board: &Board,
    side: Side,
    moves: Vec<Move>,
    config: &MonteCarloConfig,
    rng: &mut fastrand::Rng,
) -> Vec<CandidateStats> {
    let start = Instant::now();
    let n = moves.len() as u32;

    moves
        .into_iter()
        .enumerate()
        .map(|(i, mv)| {
            let mut child = *board;
            apply_move(&mut child, side, &mv);

            let deadline = config
                .time_limit
                .map(|limit| start + limit * (i as u32 + 1) / n);
            let mut stats = CandidateStats::new(mv);

            for _ in 0..config.playouts {
                // A candidate always gets at least one playout.
                if stats.playouts() > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
                    break;
                }
                let mut sim = child;
                let mut stream = rng.fork();
                stats.record(playout(&mut sim, side.opponent(), side, &mut stream));
            }

            debug!(
                point = ?stats.mv.point(),
                wins = stats.wins,
                losses = stats.losses,
                draws = stats.draws,
                score = stats.score(),
                "candidate evaluated"
            );
            stats
        })
        .collect()
}

/// Playout statistics for every legal move of `side`, in generation order.
pub fn evaluate_candidates(
    board: &Board,
    side: Side,
    config: &MonteCarloConfig,
    rng: &mut fastrand::Rng,
) -> Vec<CandidateStats> {
    evaluate(board, side, legal_moves(board, side), config, rng)
}

/// Index of the first candidate with the strictly greatest score.
fn best_candidate(stats: &[CandidateStats]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, s) in stats.iter().enumerate() {
        let score = s.score();
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

/// Pick a move for `side` by random playouts.
///
/// Returns `None` when `side` has no legal move. A single legal move is
/// returned straight away without consulting `rng`.
pub fn select_move(
    board: &Board,
    side: Side,
    config: &MonteCarloConfig,
    rng: &mut fastrand::Rng,
) -> Option<Move> {
    let mut moves = legal_moves(board, side);
    if moves.len() <= 1 {
        return moves.pop();
    }

    let start = Instant::now();
    let candidates = moves.len();
    let mut stats = evaluate(board, side, moves, config, rng);
    let best = best_candidate(&stats)?;

    let chosen = stats.swap_remove(best);
    info!(
        %side,
        candidates,
        point = ?chosen.mv.point(),
        score = chosen.score(),
        winrate = chosen.winrate(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "monte carlo search finished"
    );
    Some(chosen.mv)
}

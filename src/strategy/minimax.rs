//! High difficulty: depth-bounded minimax with static evaluation.

use super::{MoveStrategy, open_cells};
use crate::board::{Board, Player, Square};
use crate::error::EngineError;
use crate::rules::{self, GameOutcome, LINES};

/// Search horizon in plies. With branching at most 9 the tree stays small
/// enough to walk synchronously.
const MAX_DEPTH: i32 = 6;

/// Base score for a completed line inside the search.
const WIN_SCORE: i32 = 10;

/// Full game-tree search to [`MAX_DEPTH`] plies.
///
/// Terminal nodes score `10 - depth` for the optimized player's win and
/// `depth - 10` for the opponent's, so faster wins and slower losses are
/// preferred; a full board scores 0. Nodes cut off by the horizon fall back
/// to [`evaluate`].
#[derive(Debug, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates the strategy. Search is deterministic; no random source.
    pub fn new() -> Self {
        Self
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn choose(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        let cells = open_cells(board)?;
        let mut scratch = board.clone();

        let mut best: Option<(usize, i32)> = None;
        for cell in cells {
            let score =
                scratch.with_mark(cell, player, |b| search(b, 0, player.opponent(), player));
            // Strictly better only: ties go to the lowest index.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }
        best.map(|(cell, _)| cell).ok_or(EngineError::NoLegalMove)
    }
}

/// Recursive depth-limited search, scored from `optimized`'s perspective.
///
/// The node maximizes when `to_move` is the optimized player and minimizes
/// otherwise, so the same search serves whichever mark is being optimized.
/// Every speculative placement goes through [`Board::with_mark`], which
/// restores the cell on the way out; the search never leaves a mark behind.
fn search(board: &mut Board, depth: i32, to_move: Player, optimized: Player) -> i32 {
    match rules::outcome(board) {
        GameOutcome::Win(player) if player == optimized => return WIN_SCORE - depth,
        GameOutcome::Win(_) => return depth - WIN_SCORE,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }
    if depth >= MAX_DEPTH {
        return evaluate(board, optimized);
    }

    let maximizing = to_move == optimized;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for cell in board.empty_cells() {
        let score = board.with_mark(cell, to_move, |b| {
            search(b, depth + 1, to_move.opponent(), optimized)
        });
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Static evaluation at the depth cutoff, summed over all 8 lines.
///
/// Per line: +100 when the optimized player holds all three cells, +10 for
/// two plus an empty, +1 for one plus two empties; independently of those
/// bonuses, -50 when the opponent holds exactly two with the third empty.
/// The penalty is additive rather than exclusive, preserving the original
/// tuning.
fn evaluate(board: &Board, optimized: Player) -> i32 {
    let opponent = optimized.opponent();
    let mut score = 0;
    for line in LINES {
        let mut own = 0;
        let mut theirs = 0;
        for cell in line {
            match board.get(cell) {
                Some(Square::Occupied(p)) if p == optimized => own += 1,
                Some(Square::Occupied(p)) if p == opponent => theirs += 1,
                _ => {}
            }
        }
        let empty = 3 - own - theirs;

        if own == 3 {
            score += 100;
        } else if own == 2 && empty == 1 {
            score += 10;
        } else if own == 1 && empty == 2 {
            score += 1;
        }
        if theirs == 2 && empty == 1 {
            score -= 50;
        }
    }
    score
}

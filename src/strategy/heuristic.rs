//! Medium difficulty: single-ply lookahead.

use super::{MoveStrategy, open_cells};
use crate::board::{Board, Player};
use crate::error::EngineError;
use crate::rng::GameRng;
use crate::rules;

/// One-ply lookahead with a strict priority order.
///
/// 1. Complete an own line if some empty cell does so (lowest index first).
/// 2. Otherwise block the cell where the opponent could complete a line
///    next turn (lowest index first).
/// 3. Otherwise fall back to a uniform random choice.
///
/// Lookahead marks are placed on a scratch copy and reverted before
/// returning; the caller's board is read-only here.
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: GameRng,
}

impl HeuristicStrategy {
    /// Creates the strategy around the given random source.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for HeuristicStrategy {
    fn choose(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        let cells = open_cells(board)?;
        let mut scratch = board.clone();

        if let Some(cell) = completing_cell(&mut scratch, player, &cells) {
            return Ok(cell);
        }
        if let Some(cell) = completing_cell(&mut scratch, player.opponent(), &cells) {
            return Ok(cell);
        }
        self.rng.choose(&cells).ok_or(EngineError::NoLegalMove)
    }
}

/// First empty cell (ascending) where `mover` would complete a line.
fn completing_cell(board: &mut Board, mover: Player, cells: &[usize]) -> Option<usize> {
    cells
        .iter()
        .copied()
        .find(|&cell| board.with_mark(cell, mover, |b| rules::winner(b) == Some(mover)))
}

//! Low difficulty: uniform random choice.

use super::{MoveStrategy, open_cells};
use crate::board::{Board, Player};
use crate::error::EngineError;
use crate::rng::GameRng;

/// Picks uniformly at random among the empty cells.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Creates the strategy around the given random source.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for RandomStrategy {
    fn choose(&mut self, board: &Board, _player: Player) -> Result<usize, EngineError> {
        let cells = open_cells(board)?;
        self.rng.choose(&cells).ok_or(EngineError::NoLegalMove)
    }
}

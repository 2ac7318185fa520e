//! Move selection for the automated player.
//!
//! Three interchangeable strategies sit behind the [`MoveStrategy`] trait,
//! one per [`Difficulty`] tier. [`MoveSelector`] picks the strategy once at
//! construction so the rest of the engine never branches on difficulty.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::board::{Board, Player};
use crate::error::EngineError;
use crate::rng::GameRng;
use crate::rules::{self, GameOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier of the automated opponent, configured once per match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random choice among empty cells.
    #[default]
    Low,
    /// One-ply lookahead: win if possible, else block, else random.
    Medium,
    /// Depth-bounded minimax with static evaluation.
    High,
}

/// A strategy that chooses the next move for the acting player.
///
/// Implementations must return an empty-cell index, or fail with
/// [`EngineError::NoLegalMove`] when the board is already terminal. The
/// caller's board is never mutated.
pub trait MoveStrategy: std::fmt::Debug {
    /// Chooses a cell for `player` on the given board.
    fn choose(&mut self, board: &Board, player: Player) -> Result<usize, EngineError>;
}

/// Returns the empty cells of a non-terminal board in ascending order.
///
/// Shared guard for all strategies: a won or full board has no legal move,
/// even if empty cells remain after a completed line.
pub(crate) fn open_cells(board: &Board) -> Result<Vec<usize>, EngineError> {
    if rules::outcome(board) != GameOutcome::InProgress {
        return Err(EngineError::NoLegalMove);
    }
    Ok(board.empty_cells())
}

/// Move selector for the automated player.
///
/// Owns the strategy picked for the configured difficulty. Each call is a
/// pure function of the board, the acting player, and the RNG state; no
/// state leaks between matches beyond the RNG stream.
#[derive(Debug)]
pub struct MoveSelector {
    difficulty: Difficulty,
    strategy: Box<dyn MoveStrategy>,
}

impl MoveSelector {
    /// Creates a selector with an entropy-seeded random source.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, GameRng::from_entropy())
    }

    /// Creates a selector with a fixed seed, for reproducible matches.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, GameRng::seeded(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: GameRng) -> Self {
        debug!(seed = rng.seed(), %difficulty, "building selector");
        let strategy: Box<dyn MoveStrategy> = match difficulty {
            Difficulty::Low => Box::new(RandomStrategy::new(rng)),
            Difficulty::Medium => Box::new(HeuristicStrategy::new(rng)),
            Difficulty::High => Box::new(MinimaxStrategy::new()),
        };
        Self {
            difficulty,
            strategy,
        }
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses the next move for `player`.
    ///
    /// Fails with [`EngineError::NoLegalMove`] on a terminal board.
    #[instrument(skip(self, board), fields(difficulty = %self.difficulty))]
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        let cell = self.strategy.choose(board, player)?;
        debug!(%player, cell, "move selected");
        Ok(cell)
    }
}

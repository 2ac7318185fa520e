//! Tic-tac-toe engine with a three-tier computer opponent.
//!
//! The crate splits into a small core and thin supplements around it:
//!
//! - **board / rules**: the 3x3 board, move application, and terminal-state
//!   detection. Outcomes are derived on demand, never stored.
//! - **strategy**: move selection for the automated player at three
//!   difficulty tiers - uniform random, one-ply win-or-block lookahead, and
//!   depth-bounded minimax with static evaluation.
//! - **game**: the per-match turn state machine driving human and automated
//!   moves alternately.
//! - **history**: an injected win/loss/draw tally store, kept outside the
//!   core's lifecycle.
//!
//! # Example
//!
//! ```
//! use sanmoku::{Board, Difficulty, MoveSelector, Player, apply_move};
//!
//! # fn main() -> Result<(), sanmoku::EngineError> {
//! let mut board = Board::new();
//! apply_move(&mut board, 4, Player::X)?;
//!
//! let mut selector = MoveSelector::seeded(Difficulty::High, 7);
//! let reply = selector.select_move(&board, Player::O)?;
//! apply_move(&mut board, reply, Player::O)?;
//! assert!(!board.is_empty(reply));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod history;
mod rng;
mod rules;
mod strategy;

// Crate-level exports - board and rules
pub use board::{Board, CELLS, Player, Square};
pub use rules::{GameOutcome, LINES, apply_move, is_full, outcome, winner};

// Crate-level exports - errors
pub use error::EngineError;

// Crate-level exports - move selection
pub use rng::GameRng;
pub use strategy::{
    Difficulty, HeuristicStrategy, MinimaxStrategy, MoveSelector, MoveStrategy, RandomStrategy,
};

// Crate-level exports - match and history
pub use game::{Match, MatchError, Turn};
pub use history::{FileHistory, HistoryError, HistoryStore, InMemoryHistory, Tally};

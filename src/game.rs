//! Match state machine: one human against the automated opponent.
//!
//! The engine computes; the match tracks whose turn it is and feeds the
//! selector. Mark assignment follows convention: whoever moves first
//! plays X.

use crate::board::{Board, Player};
use crate::error::EngineError;
use crate::rules::{self, GameOutcome};
use crate::strategy::{Difficulty, MoveSelector};
use tracing::{info, instrument};

/// Whose move the match is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting for the human player's move.
    Human,
    /// Waiting for the automated player's move.
    Automated,
    /// Terminal; absorbing until [`Match::reset`].
    Over,
}

/// Error from the match layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// A move arrived while it was the other side's turn.
    #[display("move played out of turn")]
    OutOfTurn,

    /// The match is over; reset before playing again.
    #[display("match is over; reset to continue")]
    Finished,

    /// The engine rejected the move.
    #[display("{_0}")]
    #[from]
    Engine(EngineError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Engine(err) => Some(err),
            _ => None,
        }
    }
}

/// A single match between the human and the automated opponent.
#[derive(Debug)]
pub struct Match {
    board: Board,
    human_mark: Player,
    selector: MoveSelector,
    first: Turn,
    turn: Turn,
}

impl Match {
    /// Creates a match with an entropy-seeded selector.
    #[instrument]
    pub fn new(difficulty: Difficulty, human_first: bool) -> Self {
        Self::with_selector(MoveSelector::new(difficulty), human_first)
    }

    /// Creates a reproducible match from a fixed RNG seed.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, human_first: bool, seed: u64) -> Self {
        Self::with_selector(MoveSelector::seeded(difficulty, seed), human_first)
    }

    fn with_selector(selector: MoveSelector, human_first: bool) -> Self {
        let first = if human_first {
            Turn::Human
        } else {
            Turn::Automated
        };
        info!(difficulty = %selector.difficulty(), human_first, "starting match");
        Self {
            board: Board::new(),
            human_mark: if human_first { Player::X } else { Player::O },
            selector,
            first,
            turn: first,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose move the match is waiting for.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the human player's mark.
    pub fn human_mark(&self) -> Player {
        self.human_mark
    }

    /// Returns the automated player's mark.
    pub fn automated_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    /// Derives the current outcome from the board.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.board)
    }

    /// Applies the human player's move at `cell`.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, cell: usize) -> Result<GameOutcome, MatchError> {
        self.expect_turn(Turn::Human)?;
        rules::apply_move(&mut self.board, cell, self.human_mark)?;
        Ok(self.advance(Turn::Automated))
    }

    /// Selects and applies the automated player's move.
    ///
    /// Returns the chosen cell together with the outcome after the move.
    #[instrument(skip(self))]
    pub fn play_automated(&mut self) -> Result<(usize, GameOutcome), MatchError> {
        self.expect_turn(Turn::Automated)?;
        let mark = self.automated_mark();
        let cell = self.selector.select_move(&self.board, mark)?;
        rules::apply_move(&mut self.board, cell, mark)?;
        Ok((cell, self.advance(Turn::Human)))
    }

    /// Clears the board and hands the move back to the configured first
    /// mover. The selector (and its RNG stream) carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting match");
        self.board = Board::new();
        self.turn = self.first;
    }

    fn expect_turn(&self, expected: Turn) -> Result<(), MatchError> {
        match self.turn {
            Turn::Over => Err(MatchError::Finished),
            turn if turn == expected => Ok(()),
            _ => Err(MatchError::OutOfTurn),
        }
    }

    fn advance(&mut self, next: Turn) -> GameOutcome {
        let outcome = self.outcome();
        self.turn = if outcome == GameOutcome::InProgress {
            next
        } else {
            info!(?outcome, "match finished");
            Turn::Over
        };
        outcome
    }
}

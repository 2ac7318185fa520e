//! Engine error types.

/// Error surfaced by the engine.
///
/// Both variants are caller contract violations rather than recoverable
/// runtime conditions: the driver is expected to check
/// [`crate::rules::outcome`] before acting. A rejected move leaves the
/// board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The move targets a cell outside 0-8 or one that is already occupied.
    #[display("invalid move at cell {_0}: out of range or occupied")]
    InvalidMove(usize),

    /// Move selection was requested on a board that is already terminal.
    #[display("no legal move: board is won or full")]
    NoLegalMove,
}

impl std::error::Error for EngineError {}

//! Core domain types: players, squares, and the 3x3 board.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order:
///
/// ```text
/// 0|1|2
/// -+-+-
/// 3|4|5
/// -+-+-
/// 6|7|8
/// ```
///
/// A cell is only ever written by placing a mark into an empty cell;
/// occupied cells are never overwritten outside of search backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at the given cell, or `None` if out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks whether the cell is in range and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns the empty cell indices in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Writes a square without legality checks.
    ///
    /// Callers must keep `cell` in range; move legality lives in
    /// [`crate::rules::apply_move`].
    pub(crate) fn set(&mut self, cell: usize, square: Square) {
        self.squares[cell] = square;
    }

    /// Places `player`'s mark on an empty cell, runs `probe`, then restores
    /// the cell before returning the probe's result.
    ///
    /// This is the single mutation point used by lookahead and tree search,
    /// so the caller's board is bitwise unchanged on every exit path.
    pub(crate) fn with_mark<T>(
        &mut self,
        cell: usize,
        player: Player,
        probe: impl FnOnce(&mut Self) -> T,
    ) -> T {
        debug_assert!(self.is_empty(cell), "with_mark on occupied cell {cell}");
        self.squares[cell] = Square::Occupied(player);
        let result = probe(self);
        self.squares[cell] = Square::Empty;
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = row * 3 + col;
                match self.squares[cell] {
                    Square::Empty => write!(f, "{cell}")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(board.is_empty(0));
        assert!(board.is_empty(8));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_with_mark_restores_on_exit() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X));
        let before = board.clone();

        let seen = board.with_mark(4, Player::O, |b| b.get(4));
        assert_eq!(seen, Some(Square::Occupied(Player::O)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_shows_indices_for_empty_cells() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X));
        let rendered = board.to_string();
        assert!(rendered.contains("3|X|5"));
        assert!(rendered.starts_with("0|1|2"));
    }
}

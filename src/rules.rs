//! Game rules: move application, win and draw detection.

use crate::board::{Board, CELLS, Player, Square};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines: three rows, three columns, two diagonals.
///
/// The scan order is fixed so [`winner`] is deterministic; a legal board
/// can hold at most one winner, but reproducibility matters for tests.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of a board position.
///
/// Always derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game is still going.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// The board is full with no winner.
    Draw,
}

/// Places `player`'s mark at `cell`.
///
/// Fails with [`EngineError::InvalidMove`] if the cell is out of range or
/// occupied; the board is unchanged on failure.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, cell: usize, player: Player) -> Result<(), EngineError> {
    if cell >= CELLS || !board.is_empty(cell) {
        return Err(EngineError::InvalidMove(cell));
    }
    board.set(cell, Square::Occupied(player));
    Ok(())
}

/// Returns the owner of the first completed line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(Square::Occupied(player)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(player))
            && board.get(c) == Some(Square::Occupied(player))
        {
            return Some(player);
        }
    }
    None
}

/// Checks whether every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the outcome of the position.
///
/// The winner check takes precedence over fullness, so a full board with a
/// completed line reports a win, not a draw.
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        GameOutcome::Win(player)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(cell, player) in marks {
            apply_move(&mut board, cell, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
    }

    #[test]
    fn test_winner_each_line() {
        for line in LINES {
            let board = board_from(&[
                (line[0], Player::X),
                (line[1], Player::X),
                (line[2], Player::X),
            ]);
            assert_eq!(winner(&board), Some(Player::X), "line {line:?}");
            assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
        }
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_from(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_win_takes_precedence_over_draw_on_full_board() {
        // X O X / X O O / X X O - full, X wins the left column.
        let board = board_from(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::X),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert!(is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_draw_on_full_board_without_winner() {
        // X O X / O X X / O X O - no line completed.
        let board = board_from(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = board_from(&[(4, Player::X)]);
        let before = board.clone();
        assert_eq!(
            apply_move(&mut board, 4, Player::O),
            Err(EngineError::InvalidMove(4))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            apply_move(&mut board, 9, Player::X),
            Err(EngineError::InvalidMove(9))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let board = board_from(&[(0, Player::X), (4, Player::O)]);
        assert_eq!(outcome(&board), outcome(&board));
    }
}

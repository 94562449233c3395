//! Full-board detection for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::O));
        }
        assert!(is_full(&board));
    }
}

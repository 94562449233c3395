//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines are scanned in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::X));
        board.set(Position::TopCenter, Cell::Occupied(Player::X));
        board.set(Position::TopRight, Cell::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Player::O));
        board.set(Position::Center, Cell::Occupied(Player::O));
        board.set(Position::BottomLeft, Cell::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}

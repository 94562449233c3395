//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is derived from the cells.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from the board.
///
/// A completed line wins even when empty cells remain; a full board
/// with no line is a draw.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

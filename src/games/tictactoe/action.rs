//! Move records and move rejection reasons.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

/// Reason a move request was rejected.
///
/// Rejection never mutates the session; the caller decides whether to
/// ignore the request or prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is outside the 0-8 range.
    #[display("Position {} is off the board", _0)]
    OutOfRange(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already taken", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Player),
}

impl std::error::Error for InvalidMove {}

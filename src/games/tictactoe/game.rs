//! Game session: the board, whose turn it is, and whether play continues.

use super::action::{InvalidMove, Move};
use super::invariants::{self, SessionInvariants};
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, GameStatus, Player};
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe, owned by the caller.
///
/// X always moves first. Once the status is terminal the session
/// rejects every further move until [`GameSession::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) board: Board,
    pub(super) turn: Player,
    pub(super) active: bool,
    pub(super) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            active: true,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns true while moves are still accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns every empty position in row-major order.
    pub fn legal_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Places `player`'s mark at `index` (0-8).
    ///
    /// On success the turn passes to the other player and the resulting
    /// status is returned. A terminal status deactivates the session.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] without touching the session when the game is
    /// over, it is not `player`'s turn, the index is off the board, or the
    /// cell is taken.
    #[instrument(skip(self), fields(turn = %self.turn, active = self.active))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, InvalidMove> {
        if !self.active {
            return Err(InvalidMove::GameOver);
        }
        if player != self.turn {
            return Err(InvalidMove::OutOfTurn(player));
        }
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(InvalidMove::Occupied(position));
        }

        self.board.set(position, Cell::Occupied(player));
        self.history.push(Move::new(player, position));

        let status = self.status();
        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game concluded");
            self.active = false;
        }
        self.turn = player.opponent();

        debug!(%position, %status, "Move applied");
        debug_assert!(
            invariants::check_all::<SessionInvariants>(self).is_ok(),
            "session invariants violated after {}",
            position
        );

        Ok(status)
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GameSession, moves: &[usize]) {
        for &index in moves {
            let player = session.turn();
            session.apply_move(index, player).unwrap();
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.turn(), Player::X);
        assert!(session.is_active());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.legal_positions().len(), 9);
    }

    #[test]
    fn test_turn_alternates() {
        let mut session = GameSession::new();
        assert_eq!(session.apply_move(4, Player::X), Ok(GameStatus::InProgress));
        assert_eq!(session.turn(), Player::O);
        assert_eq!(session.apply_move(0, Player::O), Ok(GameStatus::InProgress));
        assert_eq!(session.turn(), Player::X);
        assert_eq!(
            session.history(),
            &[
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft)
            ]
        );
    }

    #[test]
    fn test_rejections_leave_session_untouched() {
        let mut session = GameSession::new();
        play(&mut session, &[4]);
        let before = session.clone();

        assert_eq!(session.apply_move(9, Player::O), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(
            session.apply_move(4, Player::O),
            Err(InvalidMove::Occupied(Position::Center))
        );
        assert_eq!(session.apply_move(0, Player::X), Err(InvalidMove::OutOfTurn(Player::X)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_deactivates_session() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4]);
        assert_eq!(session.apply_move(2, Player::X), Ok(GameStatus::Won(Player::X)));
        assert!(!session.is_active());
        assert_eq!(session.status(), GameStatus::Won(Player::X));

        let before = session.clone();
        let next = session.turn();
        assert_eq!(session.apply_move(8, next), Err(InvalidMove::GameOver));
        assert_eq!(session, before);
    }

    #[test]
    fn test_draw_deactivates_session() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 2, 1, 7, 6, 3, 5]);
        assert_eq!(session.apply_move(8, Player::X), Ok(GameStatus::Draw));
        assert!(!session.is_active());
        assert!(session.legal_positions().is_empty());
    }

    #[test]
    fn test_reset_after_win() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.status(), GameStatus::Won(Player::X));

        session.reset();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.board().cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(session.turn(), Player::X);
        assert!(session.is_active());
        assert!(session.history().is_empty());
    }
}

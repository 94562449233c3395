//! Properties that must hold for every reachable [`GameSession`].
//!
//! Checked after each accepted move in debug builds and testable on
//! their own.

use super::game::GameSession;
use super::types::{Board, Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every violated invariant.
    fn violations(state: &S) -> Vec<&'static str>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn violations(state: &S) -> Vec<&'static str> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(I1::description());
        }
        if !I2::holds(state) {
            violations.push(I2::description());
        }
        violations
    }
}

/// Checks a set of invariants, returning the violated descriptions.
pub fn check_all<I: InvariantSet<GameSession>>(
    session: &GameSession,
) -> Result<(), Vec<&'static str>> {
    let violations = I::violations(session);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Invariant: the board is exactly the replay of the move history,
/// with every move landing on a cell that was empty at the time.
pub struct HistoryConsistent;

impl Invariant<GameSession> for HistoryConsistent {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            if !replayed.is_empty(mv.position) {
                return false;
            }
            replayed.set(mv.position, Cell::Occupied(mv.player));
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board must equal the replay of the move history"
    }
}

/// Invariant: X moves first, players alternate, and the turn belongs to
/// whoever did not make the last move.
pub struct AlternatingTurn;

impl Invariant<GameSession> for AlternatingTurn {
    fn holds(session: &GameSession) -> bool {
        let mut expected = Player::X;
        for mv in session.history() {
            if mv.player != expected {
                return false;
            }
            expected = expected.opponent();
        }
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Players must alternate starting with X"
    }
}

/// All session invariants.
pub type SessionInvariants = (HistoryConsistent, AlternatingTurn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_for_new_session() {
        assert!(check_all::<SessionInvariants>(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_game() {
        let mut session = GameSession::new();
        for index in [4, 0, 8, 2, 1, 7] {
            let player = session.turn();
            session.apply_move(index, player).unwrap();
            assert!(check_all::<SessionInvariants>(&session).is_ok());
        }
    }

    #[test]
    fn test_tampered_session_is_detected() {
        let mut session = GameSession::new();
        session.apply_move(4, Player::X).unwrap();
        session.board.set(super::super::Position::TopLeft, Cell::Occupied(Player::O));

        let violations = check_all::<SessionInvariants>(&session).unwrap_err();
        assert_eq!(violations, vec![HistoryConsistent::description()]);
    }
}

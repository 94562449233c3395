//! Exhaustive check that the move selector never loses.
//!
//! Every possible sequence of X moves is played against O's chosen replies.

use oxo::games::tictactoe::rules;
use oxo::{Board, Cell, GameSession, GameStatus, Player, select_move};

#[derive(Debug, Default)]
struct Outcomes {
    o_wins: usize,
    draws: usize,
}

impl Outcomes {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            other => panic!("unexpected final status {:?}", other),
        }
    }
}

/// X to move in `session`; tries every X move and answers with the selector.
fn explore_human_first(session: &GameSession, outcomes: &mut Outcomes) {
    for position in session.legal_positions() {
        let mut next = session.clone();
        let status = next.apply_move(position.to_index(), Player::X).unwrap();
        if status.is_terminal() {
            outcomes.record(status);
            continue;
        }

        let reply = select_move(next.board()).unwrap();
        let status = next.apply_move(reply.to_index(), Player::O).unwrap();
        if status.is_terminal() {
            outcomes.record(status);
            continue;
        }

        explore_human_first(&next, outcomes);
    }
}

/// O to move on `board`; the selector moves, then every X reply is tried.
fn explore_computer_first(board: Board, outcomes: &mut Outcomes) {
    let mut board = board;
    let reply = select_move(&board).unwrap();
    board.set(reply, Cell::Occupied(Player::O));

    let status = rules::status(&board);
    if status.is_terminal() {
        outcomes.record(status);
        return;
    }

    for position in board.empty_positions() {
        let mut next = board;
        next.set(position, Cell::Occupied(Player::X));
        let status = rules::status(&next);
        if status.is_terminal() {
            outcomes.record(status);
        } else {
            explore_computer_first(next, outcomes);
        }
    }
}

#[test]
fn test_never_loses_when_human_moves_first() {
    let mut outcomes = Outcomes::default();
    explore_human_first(&GameSession::new(), &mut outcomes);

    assert!(outcomes.draws > 0);
    assert!(outcomes.o_wins > 0);
}

#[test]
fn test_never_loses_when_computer_moves_first() {
    let mut outcomes = Outcomes::default();
    explore_computer_first(Board::new(), &mut outcomes);

    assert!(outcomes.draws > 0);
    assert!(outcomes.o_wins > 0);
}

//! Move selection for the computer player.
//!
//! Exhaustive minimax with alpha-beta pruning. O maximizes, X minimizes.
//! The search has no depth limit and is deterministic for a given board.

use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Cell, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Minimax score from O's point of view.
pub type Score = i8;

/// Score of a board where O has completed a line.
pub const O_WINS: Score = 1;
/// Score of a full board with no line.
pub const DRAW: Score = 0;
/// Score of a board where X has completed a line.
pub const X_WINS: Score = -1;

/// Static evaluation of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The game is over with this score.
    Terminal(Score),
    /// Nobody has won and at least one cell is empty.
    Ongoing,
}

/// Scores a board without searching.
///
/// "No winner yet" and "draw" are different answers: only a full board
/// with no line is [`DRAW`].
pub fn evaluate(board: &Board) -> Evaluation {
    match check_winner(board) {
        Some(Player::O) => Evaluation::Terminal(O_WINS),
        Some(Player::X) => Evaluation::Terminal(X_WINS),
        None if is_full(board) => Evaluation::Terminal(DRAW),
        None => Evaluation::Ongoing,
    }
}

/// Returns the minimax value of `board` with `to_move` on turn.
///
/// Cells are tried left to right, row by row; each is filled, searched and
/// emptied again, so `board` is unchanged when this returns. Siblings are
/// skipped once `beta <= alpha`.
pub fn minimax(board: &mut Board, to_move: Player, mut alpha: Score, mut beta: Score) -> Score {
    if let Evaluation::Terminal(score) = evaluate(board) {
        return score;
    }

    let mut best = match to_move {
        Player::O => Score::MIN,
        Player::X => Score::MAX,
    };

    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }

        board.set(position, Cell::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), alpha, beta);
        board.clear(position);

        match to_move {
            Player::O => {
                best = best.max(score);
                alpha = alpha.max(score);
            }
            Player::X => {
                best = best.min(score);
                beta = beta.min(score);
            }
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// A candidate move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// Where O should play.
    pub position: Position,
    /// Outcome O can force after playing there.
    pub score: Score,
}

/// Finds O's best move and the score it guarantees.
///
/// Every empty cell is scored with a fresh full window; the first cell
/// with the strictly greatest score wins, so ties go to the lowest index.
/// Returns `None` on a full board.
#[instrument(skip(board), fields(empty = board.empty_positions().len()))]
pub fn best_move(board: &Board) -> Option<ScoredMove> {
    let mut scratch = *board;
    let mut best: Option<ScoredMove> = None;

    for position in Position::ALL {
        if !scratch.is_empty(position) {
            continue;
        }

        scratch.set(position, Cell::Occupied(Player::O));
        let score = minimax(&mut scratch, Player::X, Score::MIN, Score::MAX);
        scratch.clear(position);

        if best.is_none_or(|current| score > current.score) {
            best = Some(ScoredMove { position, score });
        }
    }

    match best {
        Some(choice) => debug!(position = %choice.position, score = choice.score, "Move selected"),
        None => warn!("Move requested on a full board"),
    }
    best
}

/// Selects O's move: the position minimizing X's best achievable outcome.
///
/// The caller guarantees it is O's turn; only occupancy is checked here.
pub fn select_move(board: &Board) -> Option<Position> {
    best_move(board).map(|choice| choice.position)
}

//! One-shot move suggestions for a board given as text.

use crate::games::tictactoe::{
    Board, BoardParseError, GameStatus, Position, Score, best_move, rules, search,
};
use derive_more::{Display, From};
use serde::Serialize;
use tracing::instrument;

/// The computer's choice for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("O plays {} (position {}): {}", label, position, outlook)]
pub struct Suggestion {
    /// Row-major index of the chosen cell.
    pub position: usize,
    /// Name of the chosen cell.
    pub label: &'static str,
    /// Minimax score from O's point of view.
    pub score: Score,
    /// What perfect play leads to from here.
    pub outlook: &'static str,
}

impl Suggestion {
    fn new(position: Position, score: Score) -> Self {
        let outlook = match score {
            search::O_WINS => "O can force a win",
            search::X_WINS => "X can force a win",
            _ => "perfect play draws",
        };
        Self {
            position: position.to_index(),
            label: position.label(),
            score,
            outlook,
        }
    }
}

/// Why no suggestion could be made.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SuggestError {
    /// The board text was malformed.
    #[display("Invalid board: {}", _0)]
    #[from]
    Parse(BoardParseError),
    /// The board is already decided.
    #[display("No move to make: {}", _0)]
    Finished(GameStatus),
}

impl std::error::Error for SuggestError {}

/// Parses `cells` and returns O's move.
#[instrument]
pub fn suggest(cells: &str) -> Result<Suggestion, SuggestError> {
    let board: Board = cells.parse()?;

    let status = rules::status(&board);
    if status.is_terminal() {
        return Err(SuggestError::Finished(status));
    }

    let choice = best_move(&board).ok_or(SuggestError::Finished(status))?;
    Ok(Suggestion::new(choice.position, choice.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_suggests_winning_move() {
        let suggestion = suggest("OO_XX____").unwrap();
        assert_eq!(suggestion.position, 2);
        assert_eq!(suggestion.outlook, "O can force a win");
        assert_eq!(
            suggestion.to_string(),
            "O plays Top-right (position 2): O can force a win"
        );
    }

    #[test]
    fn test_rejects_finished_and_malformed_boards() {
        assert_eq!(
            suggest("XXXOO____"),
            Err(SuggestError::Finished(GameStatus::Won(Player::X)))
        );
        assert_eq!(
            suggest("XXO"),
            Err(SuggestError::Parse(BoardParseError::WrongLength(3)))
        );
    }
}

//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (the human, moves first).
    X,
    /// Player O (the computer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Empties the cell at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Cell::Empty);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The string did not contain exactly nine cells.
    #[display("Expected 9 cells, got {}", _0)]
    WrongLength(usize),
    /// A character was not a mark or an empty marker.
    #[display("Invalid cell character {:?} at position {}", character, index)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Row-major index of the character.
        index: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X`/`O` (any case) for marks, `_`, `.`, `-` or space for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut board = Board::new();
        for (index, character) in chars.into_iter().enumerate() {
            let cell = match character {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '_' | '.' | '-' | ' ' => Cell::Empty,
                _ => return Err(BoardParseError::InvalidCharacter { character, index }),
            };
            board.cells[index] = cell;
        }
        Ok(board)
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has concluded.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_.o- Ox".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Player::X));
        assert_eq!(board.get(Position::TopRight), Cell::Empty);
        assert_eq!(board.get(Position::Center), Cell::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomCenter), Cell::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Cell::Occupied(Player::X));
        assert_eq!(board.empty_positions().len(), 4);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XX_____Z_".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter {
                character: 'Z',
                index: 7
            })
        );
    }

    #[test]
    fn test_status_winner_and_message() {
        assert_eq!(GameStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::InProgress.winner(), None);

        assert_eq!(GameStatus::Won(Player::X).to_string(), "Player X wins!");
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw!");
        assert_eq!(GameStatus::InProgress.to_string(), "In progress");
    }

    #[test]
    fn test_display_shows_keys_for_empty_cells() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

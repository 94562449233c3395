//! Keyboard input mapping.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given position.
    Play(Position),
    /// Play the square under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game.
    Reset,
    /// Toggle sound cues.
    ToggleMute,
    /// Close the result dialog.
    Dismiss,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command; unbound keys yield `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMute),
        KeyCode::Esc => Some(Command::Dismiss),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key))
        }
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Command::Play),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

//! Application state and logic.

use super::input::{Command, command_for, move_cursor};
use crate::audio::CueSink;
use crate::config::GameConfig;
use crate::games::tictactoe::{GameSession, Player, Position};
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::score::Scoreboard;
use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

const YOUR_MOVE: &str = "Your move (X). Press 1-9 or use the arrows and Enter.";

/// Main application state.
#[derive(Debug)]
pub struct App {
    orchestrator: Orchestrator,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    status_message: String,
    result: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig, sink: Box<dyn CueSink>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            orchestrator: Orchestrator::new(config, sink, event_tx),
            event_rx,
            cursor: Position::Center,
            status_message: YOUR_MOVE.to_string(),
            result: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn session(&self) -> &GameSession {
        self.orchestrator.session()
    }

    /// Gets the running score.
    pub fn scoreboard(&self) -> &Scoreboard {
        self.orchestrator.scoreboard()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the result message while the result dialog is open.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns true while sound is muted.
    pub fn is_muted(&self) -> bool {
        self.orchestrator.is_muted()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => {
                self.orchestrator.reset();
            }
            Command::ToggleMute => {
                self.orchestrator.toggle_mute();
            }
            Command::Dismiss => self.result = None,
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlayCursor if self.result.is_some() => self.result = None,
            Command::PlayCursor => self.play(self.cursor),
            Command::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
        }
        self.drain_events();
    }

    /// Plays the computer's move once it is due and applies pending events.
    pub fn tick(&mut self, now: Instant) {
        self.orchestrator.play_due(now);
        self.drain_events();
    }

    fn play(&mut self, position: Position) {
        if let Err(e) = self.orchestrator.submit_human_move(position.to_index()) {
            debug!(error = %e, "Move rejected");
            self.status_message = format!("{}.", e);
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a game event from the orchestrator.
    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MoveMade { player, position } => {
                self.status_message = match player {
                    Player::X => format!("You played {}.", position.label()),
                    Player::O => format!("Computer played {}. {}", position.label(), YOUR_MOVE),
                };
            }
            GameEvent::ComputerThinking => {
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::GameOver { status } => {
                let message = status.to_string();
                self.status_message = format!("{} Press 'r' to play again.", message);
                self.result = Some(message);
            }
            GameEvent::Reset => {
                self.result = None;
                self.cursor = Position::Center;
                self.status_message = format!("New game. {}", YOUR_MOVE);
            }
            GameEvent::MuteToggled(muted) => {
                self.status_message = if muted { "Sound off." } else { "Sound on." }.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::games::tictactoe::Cell;

    fn app() -> App {
        let config = GameConfig::default().with_thinking_delay_ms(0);
        App::new(&config, Box::new(Silent))
    }

    #[test]
    fn test_digit_plays_and_computer_replies() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_message(), "Computer is thinking...");
        assert_eq!(app.session().board().get(Position::TopLeft), Cell::Occupied(Player::X));

        app.tick(Instant::now());
        assert_eq!(app.session().board().get(Position::Center), Cell::Occupied(Player::O));
        assert!(app.status_message().starts_with("Computer played Center."));
    }

    #[test]
    fn test_rejected_move_shows_reason() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status_message(), "It's not X's turn.");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.session().board().get(Position::TopLeft), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_game_over_opens_result_until_reset() {
        let mut app = app();
        while app.session().is_active() {
            let next = app.session().legal_positions()[0];
            app.handle_key(KeyCode::Char(char::from(b'1' + next.to_index() as u8)));
            app.tick(Instant::now());
        }
        assert!(app.result().is_some());
        assert_eq!(app.scoreboard().games_played(), 1);

        app.handle_key(KeyCode::Char('r'));
        assert!(app.result().is_none());
        assert!(app.session().history().is_empty());
        assert_eq!(app.scoreboard().games_played(), 1);
    }

    #[test]
    fn test_mute_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        assert!(app.is_muted());
        assert_eq!(app.status_message(), "Sound off.");
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}

//! Running tally of finished games.

use crate::games::tictactoe::{GameStatus, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Win and draw counters for the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        if !status.is_terminal() {
            return;
        }
        match status.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Score updated");
    }

    /// Total number of finished games.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

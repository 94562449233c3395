//! Turn orchestration between the human (X) and the computer (O).
//!
//! Everything runs on the caller's event loop. The computer's reply is
//! chosen only when its [`PendingMove`] falls due, and a reset drops the
//! pending move so a stale reply can never land on a fresh board.

use crate::audio::{Cue, CueSink, Sound};
use crate::config::GameConfig;
use crate::games::tictactoe::{
    GameSession, GameStatus, InvalidMove, Player, Position, select_move,
};
use crate::score::Scoreboard;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument};

/// Messages sent from orchestrator to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// The computer's reply is scheduled.
    ComputerThinking,
    /// The game ended; the scoreboard is already updated.
    GameOver {
        /// The terminal status.
        status: GameStatus,
    },
    /// The board was cleared for a new game.
    Reset,
    /// Sound was muted (`true`) or unmuted.
    MuteToggled(bool),
}

/// A scheduled computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    ticket: u64,
    due: Instant,
}

impl PendingMove {
    /// Identifies this scheduling; never reused.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// When the move should be played.
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Drives a game session from input events.
#[derive(Debug)]
pub struct Orchestrator {
    session: GameSession,
    scoreboard: Scoreboard,
    sound: Sound,
    thinking_delay: Duration,
    pending: Option<PendingMove>,
    next_ticket: u64,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator with a fresh session and an empty scoreboard.
    #[instrument(skip(sink, event_tx))]
    pub fn new(
        config: &GameConfig,
        sink: Box<dyn CueSink>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: GameSession::new(),
            scoreboard: Scoreboard::new(),
            sound: Sound::new(sink, *config.muted()),
            thinking_delay: config.thinking_delay(),
            pending: None,
            next_ticket: 0,
            event_tx,
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns true while sound cues are muted.
    pub fn is_muted(&self) -> bool {
        self.sound.is_muted()
    }

    /// Returns the scheduled computer move, if any.
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Plays X at `index` (0-8) on behalf of the human.
    ///
    /// If the game continues, the computer's reply is scheduled
    /// `thinking_delay` from now.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the move is rejected, including while the
    /// computer's reply is still pending.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        let status = self.session.apply_move(index, Player::X)?;
        self.after_move(status);

        if !status.is_terminal() {
            self.schedule_computer_move();
        }
        Ok(status)
    }

    /// Plays the pending computer move if it is due at `now`.
    pub fn play_due(&mut self, now: Instant) -> Option<GameStatus> {
        let pending = self.pending.filter(|pending| pending.due <= now)?;
        self.play_computer_move(pending.ticket)
    }

    /// Plays the computer move scheduled under `ticket`.
    ///
    /// Returns `None` without touching the board when `ticket` is not the
    /// current pending move, e.g. because the game was reset meanwhile.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self, ticket: u64) -> Option<GameStatus> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => self.pending = None,
            _ => {
                debug!("Ignoring stale computer move");
                return None;
            }
        }

        let Some(position) = select_move(self.session.board()) else {
            error!("Computer asked to move on a full board");
            return None;
        };

        match self.session.apply_move(position.to_index(), Player::O) {
            Ok(status) => {
                self.after_move(status);
                Some(status)
            }
            Err(e) => {
                error!(error = %e, %position, "Computer move rejected");
                None
            }
        }
    }

    /// Starts a new game, cancelling any pending computer move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = pending.ticket, "Cancelled pending computer move");
        }
        self.session.reset();
        info!("Game reset");
        self.emit(GameEvent::Reset);
    }

    /// Toggles sound cues, returning the new mute state.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.sound.toggle_mute();
        self.emit(GameEvent::MuteToggled(muted));
        muted
    }

    fn schedule_computer_move(&mut self) {
        let pending = PendingMove {
            ticket: self.next_ticket,
            due: Instant::now() + self.thinking_delay,
        };
        self.next_ticket += 1;
        self.pending = Some(pending);
        debug!(ticket = pending.ticket, delay_ms = self.thinking_delay.as_millis() as u64, "Computer move scheduled");
        self.emit(GameEvent::ComputerThinking);
    }

    fn after_move(&mut self, status: GameStatus) {
        let Some(last) = self.session.history().last().copied() else {
            return;
        };

        self.emit(GameEvent::MoveMade {
            player: last.player,
            position: last.position,
        });
        self.sound.play(match last.player {
            Player::X => Cue::PlayerX,
            Player::O => Cue::PlayerO,
        });

        if status.is_terminal() {
            self.scoreboard.record(status);
            info!(%status, games = self.scoreboard.games_played(), "Game over");
            self.emit(GameEvent::GameOver { status });
            self.sound.play(match status {
                GameStatus::Won(Player::X) => Cue::WinX,
                GameStatus::Won(Player::O) => Cue::WinO,
                _ => Cue::Draw,
            });
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

//! Sound cues for moves and results.
//!
//! Cues are fire-and-forget: a failing or muted sink never affects play.

use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// A sound cue raised by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Cue {
    /// X placed a mark.
    PlayerX,
    /// O placed a mark.
    PlayerO,
    /// X won.
    WinX,
    /// O won.
    WinO,
    /// The game was drawn.
    Draw,
}

/// Something that can play cues.
pub trait CueSink: Send {
    /// Plays a cue.
    fn play(&mut self, cue: Cue) -> io::Result<()>;
}

/// Rings the terminal bell for every cue.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl CueSink for TerminalBell {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        Ok(())
    }
}

/// Cue dispatcher with a mute toggle.
pub struct Sound {
    sink: Box<dyn CueSink>,
    muted: bool,
}

impl Sound {
    /// Creates a dispatcher over `sink`.
    pub fn new(sink: Box<dyn CueSink>, muted: bool) -> Self {
        Self { sink, muted }
    }

    /// Returns true while cues are suppressed.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flips the mute state, returning the new value.
    #[instrument(skip(self), fields(muted = self.muted))]
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(muted = self.muted, "Mute toggled");
        self.muted
    }

    /// Plays a cue unless muted. Sink errors are logged and dropped.
    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.sink.play(cue) {
            warn!(%cue, error = %e, "Sound cue failed");
        }
    }
}

impl std::fmt::Debug for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sound").field("muted", &self.muted).finish_non_exhaustive()
    }
}

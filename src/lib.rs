//! oxo - tic-tac-toe against a computer that never loses
//!
//! The human plays X and always moves first. The computer plays O and picks
//! its replies with minimax search and alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Games**: board, rules, session state and the move selector
//! - **Orchestrator**: turn flow, the deferred computer move, reset and mute
//! - **Score / Audio**: the running tally and sound cues
//! - **TUI**: the ratatui front end
//!
//! # Example
//!
//! ```
//! use oxo::{Board, Position, select_move};
//!
//! let board: Board = "OO_XX____".parse().unwrap();
//! assert_eq!(select_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod audio;
pub mod config;
pub mod games;
pub mod orchestrator;
pub mod score;
pub mod suggest;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Turn flow
pub use orchestrator::{GameEvent, Orchestrator, PendingMove};

// Crate-level exports - Score and sound
pub use audio::{Cue, CueSink, Silent, Sound, TerminalBell};
pub use score::Scoreboard;

// Crate-level exports - Suggestions
pub use suggest::{SuggestError, Suggestion, suggest};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Cell, Evaluation, GameSession, GameStatus, InvalidMove, Move, Player,
    Position, Score, ScoredMove, best_move, evaluate, select_move,
};

//! Tic-tac-toe against a minimax opponent.

mod action;
mod game;
mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{InvalidMove, Move};
pub use game::GameSession;
pub use invariants::{AlternatingTurn, HistoryConsistent, Invariant, SessionInvariants};
pub use position::Position;
pub use search::{Evaluation, Score, ScoredMove, best_move, evaluate, select_move};
pub use types::{Board, BoardParseError, Cell, GameStatus, Player};

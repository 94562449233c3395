//! Command-line interface for oxo.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print the computer's move for a board
    Suggest {
        /// Nine cells in row-major order: X, O, and _ or . for empty
        board: String,

        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for the terminal UI.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file [default: oxo.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds the computer "thinks" before moving
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start with sound muted
    #[arg(long)]
    pub mute: bool,
}

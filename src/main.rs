//! oxo - terminal tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use oxo::GameConfig;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "oxo.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args).await,
        Command::Suggest { board, json } => run_suggest(&board, json),
    }
}

/// Run the terminal UI
async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::load_or_default(PathBuf::from(DEFAULT_CONFIG))?,
    };
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }
    if args.mute {
        config = config.with_muted(true);
    }

    oxo::tui::run_tui(config).await
}

/// Print the computer's move for a board given on the command line
#[instrument]
fn run_suggest(board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let suggestion = oxo::suggest(board)?;
    info!(position = suggestion.position, score = suggestion.score, "Suggestion ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", suggestion);
    }
    Ok(())
}

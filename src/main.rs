//! Rewind - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::{AppConfig, NoSettlement, render_json, render_text, replay, run_tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { log_file } => run_play(cli.config.as_deref(), &log_file),
        Command::Replay { moves, jump, json } => {
            run_replay(cli.config.as_deref(), &moves, jump, json)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive terminal game
fn run_play(config: Option<&Path>, log_file: &Path) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    let config = AppConfig::load(config)?;
    run_tui(config, NoSettlement)
}

/// Run a headless replay
fn run_replay(
    config: Option<&Path>,
    moves: &[usize],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(config)?;
    let game = replay(moves, jump);
    info!(json, "Rendering replay");

    let output = if json {
        render_json(&game, &config).context("Failed to serialize replay")?
    } else {
        render_text(&game, &config)
    };
    println!("{}", output);
    Ok(())
}

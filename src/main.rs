//! Rewind - terminal tic-tac-toe with move-history navigation.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, Config, logging, replay, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play => {
            logging::init_file_logging(config.logging())?;
            tui::run_tui(&config)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr_logging(config.logging());
            run_replay(&moves, jump, json)
        }
    }
}

/// Applies a move script and prints the board or its JSON snapshot.
#[instrument]
fn run_replay(moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    let cells = replay::parse_moves(moves)?;
    info!(count = cells.len(), "Parsed move script");

    let game = replay::run(&cells, jump)?;
    if json {
        let snapshot = game
            .snapshot()
            .to_json_pretty()
            .context("Failed to serialize game")?;
        println!("{}", snapshot);
    } else {
        print!("{}", replay::render(&game));
    }
    Ok(())
}

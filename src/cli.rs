//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move-history navigation
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe you can rewind and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a move sequence without a terminal UI and print the result
    Replay {
        /// Cells to play, separated by commas or spaces: 0-8 or labels like
        /// "center" and "top-left"
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,

        /// Jump to this history index after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

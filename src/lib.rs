//! Rewind - tic-tac-toe with move-history navigation.
//!
//! The game rules and history live in [`rewind_tictactoe`]. This crate adds
//! the shells around them:
//!
//! - **CLI**: `play` (terminal UI) and `replay` (headless)
//! - **Config**: optional `rewind.toml`
//! - **TUI**: ratatui board and move list over one owned [`GameState`]
//!
//! # Example
//!
//! ```
//! use rewind::replay;
//!
//! let moves = replay::parse_moves(&["4,0,8"]).unwrap();
//! let game = replay::run(&moves, Some(1)).unwrap();
//! assert_eq!(game.current_move(), 1);
//! println!("{}", replay::render(&game));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig};
pub use replay::ReplayError;
pub use rewind_tictactoe::{GameState, Position, Status};
pub use tui::{App, Focus};

//! Headless replay: apply a move script and render the resulting game.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameState, JumpError, PlayOutcome, Position};
use std::fmt;
use tracing::{info, instrument, warn};

/// Errors from parsing or applying a move script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token was neither 0-8 nor a position label.
    #[display("unknown cell {:?}: use 0-8 or a label such as \"center\"", _0)]
    UnknownCell(#[error(not(source))] String),

    /// The requested jump target does not exist.
    #[display("{}", _0)]
    Jump(JumpError),
}

impl From<JumpError> for ReplayError {
    fn from(err: JumpError) -> Self {
        ReplayError::Jump(err)
    }
}

/// Splits arguments on commas and whitespace and parses each cell.
#[instrument]
pub fn parse_moves<S: AsRef<str> + fmt::Debug>(
    args: &[S],
) -> Result<Vec<Position>, ReplayError> {
    args.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|token| {
            Position::from_label_or_number(&token).ok_or(ReplayError::UnknownCell(token))
        })
        .collect()
}

/// Plays `moves` from a fresh game, then jumps to `jump` if given.
///
/// Plays that the game ignores are logged and skipped.
#[instrument]
pub fn run(moves: &[Position], jump: Option<usize>) -> Result<GameState, ReplayError> {
    let mut game = GameState::new();
    for (step, cell) in moves.iter().enumerate() {
        match game.play(*cell) {
            PlayOutcome::Placed { .. } => {}
            PlayOutcome::Ignored(reason) => {
                warn!(step, cell = %cell, %reason, "Move ignored");
            }
        }
    }
    if let Some(target) = jump {
        game.jump_to(target)?;
    }
    info!(
        len = game.len(),
        current_move = game.current_move(),
        "Replay finished"
    );
    Ok(game)
}

/// Plain-text view of a game for terminals without the interactive UI.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a>(pub &'a GameState);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "{}", game.current_board())?;
        writeln!(f)?;
        writeln!(f, "{}", game.status())?;
        writeln!(f)?;
        for entry in game.entries() {
            let marker = if entry.index == game.current_move() {
                '>'
            } else {
                ' '
            };
            writeln!(f, "{} {}", marker, entry)?;
        }
        Ok(())
    }
}

/// Board, status line and navigation list, the current entry marked with `>`.
pub fn render(game: &GameState) -> String {
    Rendered(game).to_string()
}

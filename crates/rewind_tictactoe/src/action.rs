//! Results of the two state transitions: playing a cell and jumping in history.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// What a call to [`GameState::play`](crate::GameState::play) did.
///
/// Ignored plays leave the state untouched. They are not errors; the
/// outcome only exists so callers can log or display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The mark was placed and recorded as a new history entry.
    Placed {
        /// Mark that was placed.
        mark: Player,
        /// Where it was placed.
        position: Position,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl PlayOutcome {
    /// True if the play created a new history entry.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

impl std::fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayOutcome::Placed { mark, position } => write!(f, "{} -> {}", mark, position),
            PlayOutcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}

/// Why a play was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("{} has already won", _0)]
    GameOver(Player),

    /// Raw index outside 0-8.
    #[display("index {} is off the board", _0)]
    OutOfBounds(usize),
}

/// Error returned by [`GameState::jump_to`](crate::GameState::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested move index is past the end of history.
    #[display("move #{} does not exist (history has {} entries)", requested, len)]
    OutOfRange {
        /// Index that was asked for.
        requested: usize,
        /// History length at the time.
        len: usize,
    },
}

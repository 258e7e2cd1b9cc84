//! Derived views of a game: the status line and the navigation entries.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the viewed board.
///
/// A full board without a winner still reports [`Status::NextPlayer`]; there
/// is no draw variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Some line is filled with this mark.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner; this mark plays next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

/// One navigation entry per history element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index to pass to [`GameState::jump_to`](crate::GameState::jump_to).
    pub index: usize,
}

impl HistoryEntry {
    /// Creates an entry for history index `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// True for the entry pointing at the empty starting board.
    pub fn is_start(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{}", self.index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
        assert_eq!(Status::Winner(Player::X).winner(), Some(Player::X));
        assert_eq!(Status::NextPlayer(Player::X).winner(), None);
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(HistoryEntry::new(0).to_string(), "Go to game start");
        assert_eq!(HistoryEntry::new(1).to_string(), "Go to move #1");
        assert_eq!(HistoryEntry::new(7).to_string(), "Go to move #7");
    }
}

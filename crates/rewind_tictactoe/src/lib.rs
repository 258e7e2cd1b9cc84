//! Tic-tac-toe game state with move-history navigation.
//!
//! A [`GameState`] records every board produced during a game along with the
//! cell played to reach it. Players can [`jump_to`](GameState::jump_to) any
//! earlier board and continue from there; the abandoned future is discarded
//! on the next [`play`](GameState::play).
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position, Status};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.status(), Status::NextPlayer(Player::X));
//!
//! game.jump_to(1).unwrap();
//! game.play(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod status;
mod timeline;
mod types;

pub use action::{JumpError, PlayOutcome, Rejection};
pub use position::Position;
pub use rules::{is_full, winner_of, winning_line};
pub use state::{GameSnapshot, GameState};
pub use status::{HistoryEntry, Status};
pub use timeline::Timeline;
pub use types::{Board, Player, Square};

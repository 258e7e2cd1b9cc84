//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They never
//! look at history or turn order, so they are total over every possible
//! assignment of squares, including ones no legal game reaches.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner_of, winning_line};

//! Players alternate, X first.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the mark written at history step `i` is X for odd `i` and O
/// for even `i`.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .zip(game.move_log())
            .enumerate()
            .skip(1)
            .all(|(step, (board, logged))| match logged {
                Some(cell) => board.get(*cell).mark() == Some(Player::for_move(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

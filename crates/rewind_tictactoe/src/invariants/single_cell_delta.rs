//! Each recorded board adds exactly the logged mark to its predecessor.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: `history[0]` is empty, and each later board differs from the
/// previous one only at the logged cell, which went from empty to marked.
pub struct SingleCellDelta;

impl Invariant<GameState> for SingleCellDelta {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        if history.first().map(|b| b.occupied()) != Some(0) {
            return false;
        }

        history
            .windows(2)
            .zip(game.move_log().iter().skip(1))
            .all(|(pair, logged)| {
                let (before, after) = (&pair[0], &pair[1]);
                match logged {
                    Some(cell) => {
                        before.diff(after) == [*cell]
                            && before.get(*cell) == Square::Empty
                            && after.get(*cell) != Square::Empty
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark at the logged cell"
    }
}

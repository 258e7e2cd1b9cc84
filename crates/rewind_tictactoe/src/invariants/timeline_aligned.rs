//! History and move log stay parallel and the view stays inside them.

use super::Invariant;
use crate::GameState;

/// Invariant: history and move log have equal length, only the first log
/// entry is empty, and the viewed index is a valid history index.
pub struct TimelineAligned;

impl Invariant<GameState> for TimelineAligned {
    fn holds(game: &GameState) -> bool {
        let log = game.move_log();
        game.history().len() == log.len()
            && log.first() == Some(&None)
            && log.iter().skip(1).all(Option::is_some)
            && game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "History and move log are parallel and the view is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_for_played_game() {
        let game = GameState::from_moves(&[Position::Center, Position::TopLeft]);
        assert!(TimelineAligned::holds(&game));
    }

    #[test]
    fn test_unpaired_board_violates() {
        let mut game = GameState::from_moves(&[Position::Center]);
        let extra = *game.current_board();
        game.history.push(extra);
        assert!(!TimelineAligned::holds(&game));
    }

    #[test]
    fn test_view_past_end_violates() {
        let mut game = GameState::new();
        game.current_move = 1;
        assert!(!TimelineAligned::holds(&game));
    }
}

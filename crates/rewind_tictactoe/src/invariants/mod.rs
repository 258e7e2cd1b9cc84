//! First-class invariants for a game and its history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and checked after each play in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(
    failed: impl IntoIterator<Item = Option<&'static str>>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = failed
        .into_iter()
        .flatten()
        .map(InvariantViolation::new)
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S) -> Option<&'static str> {
    (!I::holds(state)).then(I::description)
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([check::<S, I1>(state), check::<S, I2>(state)])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            check::<S, I1>(state),
            check::<S, I2>(state),
            check::<S, I3>(state),
        ])
    }
}

pub mod alternating_marks;
pub mod single_cell_delta;
pub mod timeline_aligned;

pub use alternating_marks::AlternatingMarks;
pub use single_cell_delta::SingleCellDelta;
pub use timeline_aligned::TimelineAligned;

/// Every game invariant as one set.
pub type GameInvariants = (TimelineAligned, SingleCellDelta, AlternatingMarks);

/// Panics with the violation list if any game invariant fails.
#[cfg(debug_assertions)]
pub(crate) fn assert_invariants(game: &crate::GameState) {
    if let Err(violations) = GameInvariants::check_all(game) {
        tracing::error!(?violations, "Game invariants violated");
        panic!("game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, Player, Position};

    #[test]
    fn test_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_set_holds_after_rewind_and_replay() {
        let mut game = GameState::from_moves(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ]);
        game.jump_to(1).unwrap();
        game.play(Position::BottomRight);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_set_reports_each_violation() {
        let mut game = GameState::from_moves(&[Position::Center]);
        // Overwrite the recorded board with one that has two X marks.
        game.history.truncate(1);
        game.history.push(
            Board::new()
                .with_mark(Position::Center, Player::X)
                .with_mark(Position::TopLeft, Player::X),
        );

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SingleCellDelta::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (TimelineAligned, AlternatingMarks);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}

//! Game progression with a navigable move history.
//!
//! [`GameState`] owns every board snapshot produced so far plus the cell
//! played to produce each one. Turn order and the winner are derived from
//! the viewed snapshot, never stored.

use super::action::{JumpError, PlayOutcome, Rejection};
use super::rules;
use super::status::{HistoryEntry, Status};
use super::timeline::Timeline;
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Authoritative game state.
///
/// `history[0]` is the empty board and `move_log[0]` is `None`. Every later
/// `history[i]` is `history[i - 1]` with `move_log[i]` filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Timeline<Board>,
    pub(crate) move_log: Timeline<Option<Position>>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: Timeline::with_first(Board::new()),
            move_log: Timeline::with_first(None),
            current_move: 0,
        }
    }

    /// Replays `cells` from a fresh game, ignoring plays that would be
    /// ignored interactively.
    #[instrument]
    pub fn from_moves(cells: &[Position]) -> Self {
        let mut game = Self::new();
        for cell in cells {
            game.play(*cell);
        }
        game
    }

    /// Places the next mark at `cell` on the viewed board.
    ///
    /// Ignored, with no state change, when the square is occupied or the
    /// viewed board already has a winner. Otherwise every entry after the
    /// viewed one is discarded, the new board is appended, and the view
    /// moves to it.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, cell: Position) -> PlayOutcome {
        let board = *self.current_board();

        if let Some(winner) = rules::winner_of(&board) {
            let outcome = PlayOutcome::Ignored(Rejection::GameOver(winner));
            debug!(%outcome, "Play ignored");
            return outcome;
        }
        if !board.is_empty(cell) {
            let outcome = PlayOutcome::Ignored(Rejection::SquareOccupied(cell));
            debug!(%outcome, "Play ignored");
            return outcome;
        }

        let mark = self.to_move();
        let keep = self.current_move + 1;
        let discarded = self.history.len() - keep;
        self.history.truncate(keep);
        self.move_log.truncate(keep);
        self.history.push(board.with_mark(cell, mark));
        self.move_log.push(Some(cell));
        self.current_move = self.history.len() - 1;

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        info!(
            %mark,
            position = %cell,
            move_index = self.current_move,
            discarded,
            "Mark placed"
        );
        PlayOutcome::Placed {
            mark,
            position: cell,
        }
    }

    /// Like [`play`](Self::play) but takes a raw 0-8 index.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> PlayOutcome {
        match Position::from_index(index) {
            Some(cell) => self.play(cell),
            None => {
                debug!(index, "Play ignored: off the board");
                PlayOutcome::Ignored(Rejection::OutOfBounds(index))
            }
        }
    }

    /// Moves the view to history entry `move_index`.
    ///
    /// History is left untouched; later entries are discarded only by the
    /// next [`play`](Self::play).
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_index` is not a history
    /// index. The view does not move in that case.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!(to = move_index, "Jumped");
        Ok(())
    }

    /// The viewed board.
    pub fn current_board(&self) -> &Board {
        &self.history.as_slice()[self.current_move]
    }

    /// Winner of the viewed board, or the mark that plays next.
    pub fn status(&self) -> Status {
        match rules::winner_of(self.current_board()) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Index of the viewed history entry.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Mark placed by the next play.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// All recorded boards, starting with the empty one.
    pub fn history(&self) -> &[Board] {
        self.history.as_slice()
    }

    /// Cell played to reach each history entry; `None` for the first.
    pub fn move_log(&self) -> &[Option<Position>] {
        self.move_log.as_slice()
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a game has at least its starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Cell that produced the viewed board, for highlighting.
    pub fn last_played(&self) -> Option<Position> {
        self.move_log.get(self.current_move).copied().flatten()
    }

    /// Navigation entries, one per history element.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        (0..self.history.len()).map(HistoryEntry::new)
    }

    /// True if the viewed board has no empty square.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(self.current_board())
    }

    /// Serializable read-only view.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            current_move: self.current_move,
            status: self.status(),
            board: self.current_board(),
            last_played: self.last_played(),
            history: &self.history,
            move_log: &self.move_log,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed, serializable view of a [`GameState`].
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot<'a> {
    /// Viewed history index.
    pub current_move: usize,
    /// Status of the viewed board.
    pub status: Status,
    /// The viewed board.
    pub board: &'a Board,
    /// Cell that produced the viewed board.
    pub last_played: Option<Position>,
    /// Every recorded board.
    pub history: &'a Timeline<Board>,
    /// Cell played for each recorded board.
    pub move_log: &'a Timeline<Option<Position>>,
}

impl GameSnapshot<'_> {
    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use Position::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.move_log(), &[None]);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
        assert_eq!(game.last_played(), None);
    }

    #[test]
    fn test_play_is_idempotent_rejecting() {
        let mut game = GameState::new();
        assert!(game.play(Center).is_placed());
        let after_first = game.clone();

        assert_eq!(
            game.play(Center),
            PlayOutcome::Ignored(Rejection::SquareOccupied(Center))
        );
        assert_eq!(game, after_first);
    }

    #[test]
    fn test_play_index_rejects_off_board() {
        let mut game = GameState::new();
        assert_eq!(
            game.play_index(9),
            PlayOutcome::Ignored(Rejection::OutOfBounds(9))
        );
        assert_eq!(game, GameState::new());
        assert!(game.play_index(8).is_placed());
        assert_eq!(
            game.current_board().get(BottomRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = GameState::from_moves(&[Center, TopLeft, BottomRight]);
        let history: Vec<Board> = game.history().to_vec();

        for k in 0..game.len() {
            game.jump_to(k).unwrap();
            assert_eq!(game.current_board(), &history[k]);
            assert_eq!(game.history(), history.as_slice());
        }
    }

    #[test]
    fn test_jump_out_of_range_keeps_view() {
        let mut game = GameState::from_moves(&[Center]);
        assert_eq!(
            game.jump_to(2),
            Err(JumpError::OutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_play_after_rewind_reuses_timeline_slots() {
        let mut game = GameState::from_moves(&[Center, TopLeft, BottomRight, TopRight]);
        game.jump_to(1).unwrap();
        assert!(game.play(BottomLeft).is_placed());

        assert_eq!(game.len(), 3);
        assert_eq!(game.move_log(), &[None, Some(Center), Some(BottomLeft)]);
        assert_eq!(game.history.capacity_used(), 5);
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_last_played_follows_view() {
        let mut game = GameState::from_moves(&[Center, TopLeft]);
        assert_eq!(game.last_played(), Some(TopLeft));
        game.jump_to(1).unwrap();
        assert_eq!(game.last_played(), Some(Center));
        game.jump_to(0).unwrap();
        assert_eq!(game.last_played(), None);
    }

    #[test]
    fn test_entries_match_history() {
        let game = GameState::from_moves(&[Center, TopLeft]);
        let labels: Vec<String> = game.entries().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_snapshot_json() {
        let mut game = GameState::from_moves(&[Center, TopLeft, TopRight]);
        game.jump_to(2).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&game.snapshot().to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["current_move"], 2);
        assert_eq!(json["status"]["NextPlayer"], "X");
        assert_eq!(json["last_played"], "TopLeft");
        assert_eq!(json["history"].as_array().unwrap().len(), 4);
        assert_eq!(json["move_log"][0], serde_json::Value::Null);
        assert_eq!(json["move_log"][3], "TopRight");
    }
}

//! Application state and key handling, independent of the terminal.

use crate::config::DisplayConfig;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, PlayOutcome, Position};
use tracing::{debug, instrument, warn};

use super::input::move_cursor;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    display: DisplayConfig,
    cursor: Position,
    selected: usize,
    focus: Focus,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            game: GameState::new(),
            display,
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Rendering options.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cell to highlight as the most recent move, if enabled.
    pub fn highlighted(&self) -> Option<Position> {
        if *self.display.highlight_last_move() {
            self.game.last_played()
        } else {
            None
        }
    }

    /// Status line: the game status, with a draw banner when configured.
    pub fn status_line(&self) -> String {
        let status = self.game.status();
        let draw = *self.display.announce_draw()
            && status.winner().is_none()
            && self.game.is_board_full();
        let mut line = if draw {
            format!("Draw ({})", status)
        } else {
            status.to_string()
        };
        if let Some(message) = &self.message {
            line.push_str(" | ");
            line.push_str(message);
        }
        line
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1));
                if let Some(pos) = cell {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            _ => {}
        }
    }

    fn play(&mut self, cell: Position) {
        match self.game.play(cell) {
            PlayOutcome::Placed { .. } => {
                self.selected = self.game.current_move();
            }
            outcome @ PlayOutcome::Ignored(_) => {
                debug!(%outcome, "Play ignored");
                self.message = Some(outcome.to_string());
            }
        }
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.selected = index,
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            _ => (self.selected + 1).min(last),
        };
    }
}

//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, winning_line};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board and history
            Constraint::Length(3),                // Status
            Constraint::Length(1),                // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 4), Constraint::Min(20)])
        .split(chunks[1]);
    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "arrows move | enter play/jump | 1-9 play | tab switch pane | home/end first/last | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Color::White
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.game().current_board();
    let winning = winning_line(board).map(|(_, line)| line);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                let in_winning_line = winning.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, *cell_area, app, board.get(pos), pos, in_winning_line);
            }
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    square: Square,
    pos: Position,
    in_winning_line: bool,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if in_winning_line {
        style = style.fg(Color::Green);
    }
    if app.highlighted() == Some(pos) {
        style = style.bg(Color::LightGreen);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(cell, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let items: Vec<ListItem> = game
        .entries()
        .map(|entry| {
            let (marker, style) = if entry.index == game.current_move() {
                ("* ", Style::default().add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, entry),
                style,
            )))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(pane_block("Moves", focused))
        .highlight_style(if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

//! Stateless rendering for the tic-tac-toe TUI.

use super::app::App;
use crate::config::Palette;
use crate::view::{self, CellTone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Mark, Position};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let state = app.engine().state();
    let status_color = if !state.result().is_over() {
        mark_color(app.palette(), state.turn())
    } else if let Some((_, mark)) = app.engine().winning_line() {
        mark_color(app.palette(), mark)
    } else {
        Color::Gray
    };
    let status = Paragraph::new(view::status_text(state))
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows move · Enter/Space or 1-9 place · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            draw_vertical_sep(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let state = app.engine().state();
    let palette = app.palette();

    let text = match state.board().get(pos) {
        Cell::Empty => format!("{}", pos.to_index() + 1),
        Cell::Occupied(mark) => mark.to_string(),
    };

    let mut style = match view::cell_tone(state, pos) {
        CellTone::Empty => Style::default().fg(palette.empty),
        CellTone::Mark(mark) => Style::default()
            .fg(mark_color(palette, mark))
            .add_modifier(Modifier::BOLD),
        CellTone::Winning(mark) => Style::default()
            .fg(mark_color(palette, mark))
            .bg(palette.highlight)
            .add_modifier(Modifier::BOLD),
    };
    if pos == app.cursor() && !state.result().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if view::is_cell_interactive(state, pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    // Vertically centre the symbol in the 3-line cell.
    let lines = vec![Line::from(""), Line::from(text), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(palette: &Palette, mark: Mark) -> Color {
    match mark {
        Mark::X => palette.mark_x,
        Mark::O => palette.mark_o,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Centres a `width` x `height` rectangle inside `area`, clamped to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

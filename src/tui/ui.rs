//! Stateless UI rendering for the game, its history, and the participants.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Mark, Position, Square, View};

use super::app::{App, Focus};
use crate::replay::status_line;

/// Renders the whole screen.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let view = app.game().game().current_view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Body
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(24)])
        .split(chunks[1]);

    draw_game_panel(frame, body[0], app, &view);
    draw_side_panel(frame, body[1], app);

    let help = Paragraph::new(
        "Arrows/1-9: move | Enter: play/jump | Tab: board/history | [ ]: step | c: claim | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game_panel<S>(frame: &mut Frame, area: Rect, app: &App<S>, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    draw_board(frame, chunks[0], view, cursor);

    let status_color = if view.win().is_some() { Color::Green } else { Color::Yellow };
    let status = Paragraph::new(status_line(view, app.config()))
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[1]);

    let message = Paragraph::new(app.message().clone().unwrap_or_default())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>) {
    let board_area = center_rect(area, 41, 11);

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
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &View, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = cell_style(base_style, view.is_winning_square(pos), cursor == Some(pos));

    // Vertically centre the symbol in a 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Winning cells keep their green background under the cursor.
fn cell_style(base: Style, winning: bool, under_cursor: bool) -> Style {
    match (winning, under_cursor) {
        (true, true) => base
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base.bg(Color::Green).fg(Color::Black),
        (false, true) => base.bg(Color::White).fg(Color::Black),
        (false, false) => base,
    }
}

fn draw_side_panel<S>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(area);

    let entries = app.game().game().history_entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let label_style = if entry.is_current() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(entry.label(), label_style)];
            if let Some(action) = entry.action() {
                spans.push(Span::styled(
                    format!("  {}", action),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let focused = *app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("History"),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");
    let mut state = app.history_state().clone();
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let participants: Vec<Line> = [Mark::X, Mark::O]
        .into_iter()
        .map(|mark| {
            let participant = app.config().participant(mark);
            Line::from(format!(
                "{}: {} [{}]",
                mark,
                participant.name(),
                participant.public_id_or_placeholder()
            ))
        })
        .collect();
    let roster = Paragraph::new(participants)
        .block(Block::default().borders(Borders::ALL).title("Participants"));
    frame.render_widget(roster, chunks[1]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

//! # UI Widgets Module
//!
//! This module contains functions for drawing the different UI components
//! on the screen: the tile grid, the counters, and the key help.

use crate::app::App;
use crate::tui::layout;
use fifteen::Pos;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(app: &mut App, frame: &mut Frame) {
    let (board_panel, sidebar) = layout::main_chunks(frame.area());
    draw_board(frame, app, board_panel);
    draw_info(frame, app, sidebar);
}

fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let size = app.session.size();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Board {0}x{0}", size));
    f.render_widget(block, area);

    let grid = layout::grid_area(area, size);
    let mut board_lines = Vec::new();

    for row in 1..=size {
        for sub in 0..layout::CELL_HEIGHT {
            let mut line_spans = Vec::new();
            for col in 1..=size {
                let pos = Pos::new(row, col);
                line_spans.push(cell_span(app, pos, sub));
            }
            board_lines.push(Line::from(line_spans));
        }
    }

    let paragraph = Paragraph::new(board_lines);
    f.render_widget(paragraph, grid);
}

/// One cell's worth of a board line. `sub` is the line index inside the
/// cell; the tile number sits on the middle one.
fn cell_span(app: &App, pos: Pos, sub: u16) -> Span<'static> {
    let width = layout::CELL_WIDTH as usize;
    let is_cursor = pos == app.board_cursor;
    let board = app.session.board();

    let (label, occupied) = match board.tile_at(pos) {
        Some(tile) => (tile.to_string(), true),
        None => {
            // The placeholder shows its number on its own cell while the
            // session is not hiding it; any other open cell stays blank.
            if pos == board.placeholder_pos() && !app.session.placeholder_hidden() {
                (board.placeholder_number().to_string(), false)
            } else {
                (String::new(), false)
            }
        }
    };

    let text = if sub == layout::CELL_HEIGHT / 2 {
        format!("{:^width$}", label)
    } else {
        " ".repeat(width)
    };

    let mut style = if occupied {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else if label.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        // Visible placeholder: drawn like a tile, but muted.
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }

    Span::styled(text, style)
}

fn draw_info(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .split(area);

    draw_status(f, app, chunks[0]);
    draw_recent_moves(f, app, chunks[1]);
    draw_help(f, app, chunks[2]);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let status = if session.playing() {
        "In play".to_string()
    } else if session.moves() > 0 {
        format!(
            "Solved in {} moves ({})",
            session.moves(),
            session.time_display()
        )
    } else {
        "Ready".to_string()
    };

    let text = vec![
        Line::from(format!("Moves: {}", session.moves())),
        Line::from(format!("Time:  {}", session.time_display())),
        Line::from(""),
        Line::from(status),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Game Info"));
    f.render_widget(paragraph, area);
}

fn draw_recent_moves(f: &mut Frame, app: &App, area: Rect) {
    // Only the tail fits; newest entries matter most.
    let visible = (area.height.saturating_sub(2)) as usize;
    let skip = app.recent_moves.len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .recent_moves
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, record)| {
            ListItem::new(format!(
                "{}. tile {} {} -> {}",
                i + 1,
                record.tile,
                record.from,
                record.to
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    f.render_widget(list, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(format!("[s] {}", app.session.start_label())),
        Line::from("[3] [4] [5] grid size"),
        Line::from("[arrows] cursor, [enter/space] or click to slide"),
        Line::from("[q] quit"),
    ];
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(paragraph, area);
}

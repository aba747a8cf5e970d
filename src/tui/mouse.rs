//! # Mouse Module
//!
//! Pointer adapter: a left click on a grid cell becomes a move request for
//! the tile on that cell. Hit-testing goes through the same layout math
//! the renderer uses.

use crate::app::App;
use crate::tui::layout;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application.
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    if let MouseEventKind::Down(MouseButton::Left) = kind {
        handle_mouse_click(app, col, row, terminal_size);
    }
}

fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    let (board_panel, _) = layout::main_chunks(terminal_size);
    let grid = layout::grid_area(board_panel, app.session.size());

    if let Some(cell) = layout::cell_at(grid, app.session.size(), col, row) {
        app.board_cursor = cell;
        app.request_slide(cell);
    }
}

//! # Layout Module
//!
//! Shared geometry for the terminal interface. The renderer and the mouse
//! handler both go through these functions, so a click can never land on a
//! different cell than the one drawn under it.

use fifteen::Pos;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one rendered cell in terminal columns.
pub const CELL_WIDTH: u16 = 6;
/// Height of one rendered cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

/// Splits the screen into the board panel and the info sidebar.
pub fn main_chunks(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (chunks[0], chunks[1])
}

/// The square of cells centered inside the bordered board panel.
pub fn grid_area(board_panel: Rect, size: usize) -> Rect {
    // The panel's Block border takes one column/row on each side.
    let inner = Rect {
        x: board_panel.x + 1,
        y: board_panel.y + 1,
        width: board_panel.width.saturating_sub(2),
        height: board_panel.height.saturating_sub(2),
    };
    let want_w = CELL_WIDTH * size as u16;
    let want_h = CELL_HEIGHT * size as u16;
    Rect {
        x: inner.x + inner.width.saturating_sub(want_w) / 2,
        y: inner.y + inner.height.saturating_sub(want_h) / 2,
        width: want_w.min(inner.width),
        height: want_h.min(inner.height),
    }
}

/// Maps a terminal coordinate to the 1-indexed grid cell under it.
pub fn cell_at(grid: Rect, size: usize, col: u16, row: u16) -> Option<Pos> {
    if col < grid.x || row < grid.y {
        return None;
    }
    if col >= grid.x + grid.width || row >= grid.y + grid.height {
        return None;
    }
    let c = (col - grid.x) / CELL_WIDTH;
    let r = (row - grid.y) / CELL_HEIGHT;
    if r >= size as u16 || c >= size as u16 {
        return None;
    }
    Some(Pos::new(r as usize + 1, c as usize + 1))
}

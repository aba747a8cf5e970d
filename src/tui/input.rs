//! # Input Handling Module
//!
//! Keyboard adapter: translates key presses into session operations and
//! cursor movement. Mouse events are delegated to the mouse module.

use crate::app::App;
use crate::tui::mouse;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::layout::Rect;

/// Handles a key press.
///
/// Lifecycle keys (start, size selection, quit) always apply; movement and
/// slide keys are forwarded to the session, which refuses them while idle.
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('s') => app.start_or_restart(),
        KeyCode::Char(c @ '3'..='5') => {
            app.change_grid(c as usize - '0' as usize);
        }
        KeyCode::Up => app.move_cursor_up(),
        KeyCode::Down => app.move_cursor_down(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cell = app.board_cursor;
            app.request_slide(cell);
        }
        _ => {}
    }
}

/// Handles mouse events by delegating to the mouse module.
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}

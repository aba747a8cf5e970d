//! # Application State
//!
//! This module defines the state the binary carries on top of the puzzle
//! core: the session itself, the board cursor, and the recent-move list
//! shown in the sidebar. Both input routes (keyboard and mouse) funnel
//! their slide requests through [`App::request_slide`] so move legality
//! lives in exactly one place: the session.

use fifteen::{GameSession, Pos};
use std::time::SystemTime;

/// A slide applied during this session, for the sidebar list.
#[derive(Debug, Clone)]
pub struct SlideRecord {
    pub timestamp: SystemTime,
    pub tile: usize,
    pub from: Pos,
    pub to: Pos,
}

/// The main application state.
pub struct App {
    pub should_quit: bool,
    pub session: GameSession,
    /// Keyboard cursor over the grid, 1-indexed like tile positions.
    pub board_cursor: Pos,
    pub recent_moves: Vec<SlideRecord>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            should_quit: false,
            session,
            board_cursor: Pos::new(1, 1),
            recent_moves: Vec::new(),
        }
    }

    /// Pumps pending timer ticks into the session. Called once per
    /// event-loop pass.
    pub fn update(&mut self) {
        self.session.poll_timer();
    }

    /// Routes a move request for the cell under the pointer or cursor. A
    /// cell without a tile, or a tile the session refuses, is a no-op.
    pub fn request_slide(&mut self, cell: Pos) {
        let Some(tile) = self.session.board().tile_at(cell) else {
            return;
        };
        let gap = self.session.empty_pos();
        if self.session.slide(tile) {
            if let Some(to) = gap {
                self.recent_moves.push(SlideRecord {
                    timestamp: SystemTime::now(),
                    tile,
                    from: cell,
                    to,
                });
            }
        }
    }

    /// The start control: begins a new game, or re-deals the current one.
    pub fn start_or_restart(&mut self) {
        self.session.initialize();
        self.recent_moves.clear();
        self.board_cursor = Pos::new(1, 1);
    }

    /// The size selector: rebuilds the grid, keeping the cursor in bounds.
    pub fn change_grid(&mut self, size: usize) {
        self.session.change_grid(size);
        self.recent_moves.clear();
        self.board_cursor = Pos::new(1, 1);
    }

    pub fn move_cursor_up(&mut self) {
        if self.board_cursor.row > 1 {
            self.board_cursor.row -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.board_cursor.row < self.session.size() {
            self.board_cursor.row += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.board_cursor.col > 1 {
            self.board_cursor.col -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.board_cursor.col < self.session.size() {
            self.board_cursor.col += 1;
        }
    }
}

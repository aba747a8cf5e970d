//! The game session: lifecycle, counters, move legality and win handling.
//!
//! A [`GameSession`] is the single owner of all puzzle state. The renderer
//! reads it; the input layer calls its operations; nothing else mutates it.
//! Invalid requests (unsupported grid size, a slide while idle, a slide on
//! a non-adjacent tile) degrade to silent no-ops rather than errors.

use crate::board::{Board, Pos, DEFAULT_SIZE, SUPPORTED_SIZES};
use crate::shuffle::ShuffleStrategy;
use crate::timer::Ticker;
use log::{debug, info, warn};
use std::time::Duration;

/// Wall-clock resolution of the play timer.
pub const TICK: Duration = Duration::from_secs(1);

/// One play-through from start to win or reset.
pub struct GameSession {
    board: Board,
    playing: bool,
    moves: u32,
    elapsed_secs: u64,
    /// The one unoccupied cell while a game is in progress.
    empty: Option<Pos>,
    /// The placeholder starts visible with its number and is hidden once
    /// play begins; winning reveals it again.
    placeholder_hidden: bool,
    ticker: Option<Ticker>,
    shuffler: Box<dyn ShuffleStrategy>,
}

impl GameSession {
    /// Creates an idle session. An unsupported size falls back to the
    /// default 3x3 grid.
    pub fn new(size: usize, shuffler: Box<dyn ShuffleStrategy>) -> Self {
        let size = if SUPPORTED_SIZES.contains(&size) {
            size
        } else {
            warn!("unsupported grid size {size}, using {DEFAULT_SIZE}");
            DEFAULT_SIZE
        };
        Self {
            board: Board::new(size),
            playing: false,
            moves: 0,
            elapsed_secs: 0,
            empty: None,
            placeholder_hidden: false,
            ticker: None,
            shuffler,
        }
    }

    /// Rebuilds the grid with `size^2` units in row-major order, the
    /// placeholder visible on its bottom-right cell. No-op for an
    /// unsupported size.
    pub fn setup_tiles(&mut self, size: usize) {
        if !SUPPORTED_SIZES.contains(&size) {
            debug!("ignoring unsupported grid size {size}");
            return;
        }
        self.board = Board::new(size);
        self.placeholder_hidden = false;
    }

    /// Starts (or restarts) a game: counters reset, tiles re-shuffled, the
    /// placeholder hidden, the gap opened bottom-right, timer running.
    pub fn initialize(&mut self) {
        self.playing = true;
        self.reset_game();
        self.randomize();
        self.ticker = Some(Ticker::new(TICK));
        self.placeholder_hidden = true;
        self.empty = Some(self.board.placeholder_pos());
        info!("game started on a {0}x{0} grid", self.size());
    }

    /// Zeroes both counters and cancels any running timer. Does not touch
    /// the tiles or the playing flag.
    pub fn reset_game(&mut self) {
        self.moves = 0;
        self.elapsed_secs = 0;
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Switches to a new grid size: counters and timer reset, tiles rebuilt
    /// in order. Deliberately does not re-shuffle; play state is only sane
    /// again after the next [`initialize`](Self::initialize).
    pub fn change_grid(&mut self, size: usize) {
        self.reset_game();
        self.setup_tiles(size);
        info!("grid changed to {0}x{0}", self.size());
    }

    /// Deals a fresh layout using the session's shuffle strategy.
    pub fn randomize(&mut self) {
        self.shuffler.shuffle(&mut self.board);
    }

    /// Attempts to slide `tile` into the gap. Silently refused while idle,
    /// for unknown tiles, and for tiles not adjacent to the gap. On success
    /// the gap moves to the tile's former cell, the move counter goes up,
    /// and the win condition is evaluated. Returns whether a move happened.
    pub fn slide(&mut self, tile: usize) -> bool {
        if !self.playing {
            return false;
        }
        let Some(empty) = self.empty else {
            return false;
        };
        let Some(from) = self.board.position_of(tile) else {
            debug!("slide request for unknown tile {tile}");
            return false;
        };
        if !from.is_adjacent(&empty) {
            debug!("tile {tile} at {from} is not next to the gap at {empty}");
            return false;
        }

        self.board.set_position(tile, empty);
        self.empty = Some(from);
        self.moves += 1;
        self.check();
        true
    }

    /// Evaluates the win condition: every movable tile on its home cell.
    /// On a win the timer stops, the placeholder becomes visible, the gap
    /// is cleared and the session leaves play mode.
    pub fn check(&mut self) -> bool {
        if !self.board.is_solved() {
            return false;
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        if self.playing {
            info!(
                "solved in {} moves, {}",
                self.moves,
                format_elapsed(self.elapsed_secs)
            );
        }
        self.playing = false;
        self.empty = None;
        self.placeholder_hidden = false;
        true
    }

    /// Advances the play clock by one second.
    pub fn tick(&mut self) {
        self.elapsed_secs += 1;
    }

    /// Drains pending timer ticks into the clock. Called from the UI
    /// thread once per event-loop pass; the ticker thread itself never
    /// touches session state.
    pub fn poll_timer(&mut self) {
        let mut pending = 0;
        if let Some(ticker) = &self.ticker {
            while ticker.try_recv() {
                pending += 1;
            }
        }
        for _ in 0..pending {
            self.tick();
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn empty_pos(&self) -> Option<Pos> {
        self.empty
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// The play clock formatted as zero-padded `MM:SS`.
    pub fn time_display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn placeholder_hidden(&self) -> bool {
        self.placeholder_hidden
    }

    pub fn has_active_timer(&self) -> bool {
        self.ticker.is_some()
    }

    /// Label for the start control: it reads "Restart" while a game runs.
    pub fn start_label(&self) -> &'static str {
        if self.playing {
            "Restart"
        } else {
            "Start"
        }
    }
}

pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::ScrambleShuffle;

    fn session(size: usize) -> GameSession {
        GameSession::new(size, Box::new(ScrambleShuffle))
    }

    /// Puts every tile back on its home cell and reopens the gap
    /// bottom-right, giving tests a deterministic in-play layout.
    fn rig_solved_layout(session: &mut GameSession) {
        for tile in 1..=session.board.tile_count() {
            let home = session.board.home_of(tile);
            session.board.set_position(tile, home);
        }
        session.empty = Some(session.board.placeholder_pos());
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session(3);
        assert!(!session.playing());
        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.empty_pos(), None);
        assert!(!session.placeholder_hidden());
        assert!(!session.has_active_timer());
        assert_eq!(session.start_label(), "Start");
    }

    #[test]
    fn test_unsupported_size_falls_back() {
        let session = session(7);
        assert_eq!(session.size(), DEFAULT_SIZE);
    }

    #[test]
    fn test_initialize_opens_the_gap() {
        let mut session = session(4);
        session.initialize();
        assert!(session.playing());
        assert_eq!(session.empty_pos(), Some(Pos::new(4, 4)));
        assert!(session.placeholder_hidden());
        assert!(session.has_active_timer());
        assert_eq!(session.start_label(), "Restart");
        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_slide_refused_while_idle() {
        let mut session = session(3);
        assert!(!session.slide(1));
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_slide_refused_for_non_adjacent_tile() {
        let mut session = session(3);
        session.initialize();
        rig_solved_layout(&mut session);

        // Tile 1 sits top-left, the gap bottom-right.
        let before = session.board.position_of(1);
        assert!(!session.slide(1));
        assert_eq!(session.board.position_of(1), before);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.empty_pos(), Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_slide_swaps_tile_and_gap() {
        let mut session = session(3);
        session.initialize();
        rig_solved_layout(&mut session);

        // Tile 8 is at (3,2), next to the gap at (3,3).
        assert!(session.slide(8));
        assert_eq!(session.board.position_of(8), Some(Pos::new(3, 3)));
        assert_eq!(session.empty_pos(), Some(Pos::new(3, 2)));
        assert_eq!(session.moves(), 1);
        // One tile out of place: still in play.
        assert!(session.playing());
    }

    #[test]
    fn test_win_ends_the_session() {
        let mut session = session(3);
        session.initialize();
        rig_solved_layout(&mut session);

        assert!(session.slide(8));
        assert!(session.slide(8));

        assert!(!session.playing());
        assert_eq!(session.empty_pos(), None);
        assert!(!session.placeholder_hidden());
        assert!(!session.has_active_timer());
        assert_eq!(session.moves(), 2);
        assert_eq!(session.start_label(), "Start");
    }

    #[test]
    fn test_slide_refused_after_win() {
        let mut session = session(3);
        session.initialize();
        rig_solved_layout(&mut session);
        session.slide(8);
        session.slide(8);

        assert!(!session.slide(8));
        assert_eq!(session.moves(), 2);
    }

    #[test]
    fn test_reset_game_zeroes_counters_and_timer() {
        let mut session = session(3);
        session.initialize();
        session.tick();
        session.tick();
        session.slide(99); // no-op, unknown tile
        session.reset_game();

        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(!session.has_active_timer());
    }

    #[test]
    fn test_change_grid_rebuilds_without_shuffling() {
        let mut session = session(3);
        session.initialize();
        session.tick();
        session.change_grid(5);

        assert_eq!(session.size(), 5);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(!session.has_active_timer());
        // Tiles come back in order; nothing shuffled them.
        assert!(session.board().is_solved());
    }

    #[test]
    fn test_change_grid_ignores_bad_size() {
        let mut session = session(3);
        session.change_grid(6);
        assert_eq!(session.size(), 3);
    }

    #[test]
    fn test_time_formatting() {
        let mut session = session(3);
        session.initialize();
        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.time_display(), "00:03");
        for _ in 0..58 {
            session.tick();
        }
        assert_eq!(session.time_display(), "01:01");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(600), "10:00");
    }
}

//! # Sliding-Tile Puzzle Core
//!
//! Pure game logic for a 15-puzzle-style sliding-tile game on 3x3, 4x4 and
//! 5x5 grids. This crate knows nothing about terminals or rendering: a
//! front end reads the session state and forwards move requests back in.
//!
//! ## Components
//! - **Board**: the tile-to-cell layout, adjacency test and win layout
//! - **Shuffle**: swappable strategies for dealing a fresh layout
//! - **Session**: lifecycle operations, move/time counters, win handling
//! - **Timer**: the cancellable one-second ticker a session owns while a
//!   game is running
//!
//! ## Playing a game
//! A front end constructs a [`GameSession`] with a shuffle strategy, calls
//! [`GameSession::initialize`] to start, translates clicks into
//! [`GameSession::slide`] calls, and pumps [`GameSession::poll_timer`]
//! from its event loop. Everything else (counters, the gap, win
//! detection) is the session's business.

pub mod board;
pub mod session;
pub mod shuffle;
pub mod timer;

pub use board::{Board, Pos, DEFAULT_SIZE, SUPPORTED_SIZES};
pub use session::{format_elapsed, GameSession, TICK};
pub use shuffle::{ScrambleShuffle, ShuffleStrategy, SolvableShuffle};
pub use timer::Ticker;

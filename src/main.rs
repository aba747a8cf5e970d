//! # Sliding-Tile Puzzle
//!
//! Entry point for a terminal sliding-tile puzzle on 3x3, 4x4 and 5x5
//! grids. Tiles are slid into the one open cell until they read in
//! ascending order; the session tracks moves and elapsed time.
//!
//! The interface is built with Ratatui: click a tile next to the gap (or
//! move the cursor onto it and press Enter) to slide it.
//!
//! ## Usage
//! `play [--size 3|4|5] [--solvable]`, with logging available via
//! `RUST_LOG`.

pub mod app;
pub mod tui;

use clap::Parser;
use fifteen::{GameSession, ScrambleShuffle, ShuffleStrategy, SolvableShuffle, DEFAULT_SIZE};
use std::io;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Starting grid size (3, 4 or 5)
    #[clap(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Re-draw each shuffle until it is provably solvable
    #[clap(long, action = clap::ArgAction::SetTrue)]
    solvable: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let shuffler: Box<dyn ShuffleStrategy> = if args.solvable {
        Box::new(SolvableShuffle)
    } else {
        Box::new(ScrambleShuffle)
    };

    let session = GameSession::new(args.size, shuffler);
    let mut app = app::App::new(session);
    tui::run(&mut app)
}

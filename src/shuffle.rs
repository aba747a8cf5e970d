//! Shuffle strategies.
//!
//! A shuffle rearranges every movable tile over the grid, leaving the
//! bottom-right cell free for the placeholder. The strategy is a seam:
//! move legality and win detection never depend on how the permutation
//! was drawn, so variants can be swapped without touching the session.

use crate::board::{Board, Pos};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produces a fresh tile layout on the given board.
///
/// Implementations must cover every cell except the placeholder's
/// bottom-right cell exactly once.
pub trait ShuffleStrategy {
    fn shuffle(&mut self, board: &mut Board);
}

/// The classic scramble: a bounded random draw picks the next tile out of
/// the unplaced set, and tiles are written to a fixed slot traversal that
/// skips the bottom-right cell. The result is a raw permutation with no
/// solvability guarantee.
#[derive(Debug, Default)]
pub struct ScrambleShuffle;

impl ShuffleStrategy for ScrambleShuffle {
    fn shuffle(&mut self, board: &mut Board) {
        let size = board.size();
        let mut rng = rand::thread_rng();
        let mut remaining: Vec<usize> = (1..=board.tile_count()).collect();
        let mut iteration = 0;

        while !remaining.is_empty() {
            // Bounded draw modulo the remaining count, not a uniform pick.
            let index = rng.gen_range(0..=10) % remaining.len();
            let tile = remaining.remove(index);
            board.set_position(tile, scramble_slot(iteration, size));
            iteration += 1;
        }
    }
}

/// Slot assigned at the given traversal step. Rows cycle fastest, the
/// column advances once per full row cycle, and the last row wraps one
/// column early so `(size, size)` is never produced.
fn scramble_slot(iteration: usize, size: usize) -> Pos {
    let row = iteration % size + 1;
    let wrap = if row == size { size - 1 } else { size };
    let col = iteration.div_ceil(size) % wrap + 1;
    Pos::new(row, col)
}

/// Uniform permutation, re-drawn until it passes the inversion-parity
/// solvability test. Substitutable for [`ScrambleShuffle`] when every
/// dealt game must be winnable.
#[derive(Debug, Default)]
pub struct SolvableShuffle;

impl ShuffleStrategy for SolvableShuffle {
    fn shuffle(&mut self, board: &mut Board) {
        let size = board.size();
        let mut rng = rand::thread_rng();
        let mut tiles: Vec<usize> = (1..=board.tile_count()).collect();

        loop {
            tiles.shuffle(&mut rng);
            if is_solvable(&tiles, size) {
                break;
            }
        }

        // Lay the drawn order out row-major; the one cell left over is the
        // placeholder's.
        for (slot, &tile) in tiles.iter().enumerate() {
            board.set_position(tile, Pos::new(slot / size + 1, slot % size + 1));
        }
    }
}

/// Parity test for a layout given in row-major reading order, with the
/// blank on the final cell.
fn is_solvable(tiles: &[usize], size: usize) -> bool {
    let inversions = count_inversions(tiles);
    if size % 2 == 1 {
        // Odd width: solvable iff the inversion count is even
        inversions % 2 == 0
    } else {
        // Even width: the blank's row index (from the top, 0-based) joins
        // the parity; the blank is pinned to the last row here
        (inversions + size - 1) % 2 == 1
    }
}

fn count_inversions(tiles: &[usize]) -> usize {
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&next| next < tile).count())
        .sum()
}

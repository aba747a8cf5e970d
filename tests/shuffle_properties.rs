//! Coverage and parity properties of the shuffle strategies.

use fifteen::{Board, Pos, ScrambleShuffle, ShuffleStrategy, SolvableShuffle};
use std::collections::HashSet;

fn occupied_cells(board: &Board) -> Vec<Pos> {
    (1..=board.tile_count())
        .map(|tile| board.position_of(tile).expect("tile has a position"))
        .collect()
}

#[test]
fn scramble_covers_every_cell_but_the_placeholders() {
    for size in [3usize, 4, 5] {
        for _ in 0..50 {
            let mut board = Board::new(size);
            ScrambleShuffle.shuffle(&mut board);

            let cells = occupied_cells(&board);
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), size * size - 1, "duplicate cell after shuffle");
            assert!(!unique.contains(&board.placeholder_pos()));
            for pos in &cells {
                assert!((1..=size).contains(&pos.row));
                assert!((1..=size).contains(&pos.col));
            }
        }
    }
}

#[test]
fn solvable_shuffle_keeps_even_inversion_parity() {
    // Reading the tiles row-major with the blank pinned to the last cell,
    // a solvable layout always has an even inversion count.
    for size in [3usize, 4, 5] {
        for _ in 0..50 {
            let mut board = Board::new(size);
            SolvableShuffle.shuffle(&mut board);

            let mut reading = Vec::new();
            for row in 1..=size {
                for col in 1..=size {
                    if let Some(tile) = board.tile_at(Pos::new(row, col)) {
                        reading.push(tile);
                    }
                }
            }
            assert_eq!(reading.len(), size * size - 1);
            assert_eq!(board.tile_at(board.placeholder_pos()), None);

            let inversions: usize = reading
                .iter()
                .enumerate()
                .map(|(i, &tile)| reading[i + 1..].iter().filter(|&&next| next < tile).count())
                .sum();
            assert_eq!(inversions % 2, 0);
        }
    }
}

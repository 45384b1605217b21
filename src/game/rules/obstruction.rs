//! Line-of-sight checks for sliding moves
//!
//! Each check walks the squares strictly between the two endpoints. Only
//! pieces block; empty squares and en-passant targets do not. Adjacent
//! endpoints have no interior and are always clear.

use super::board_state::Board;
use crate::game::components::Square;

/// No piece on `file` strictly between `from_rank` and `to_rank`
pub fn vertical_clear(board: &Board, file: u8, from_rank: u8, to_rank: u8) -> bool {
    interior(from_rank, to_rank).all(|rank| !board.get(Square::new(file, rank)).is_blocking())
}

/// No piece on `rank` strictly between `from_file` and `to_file`
pub fn horizontal_clear(board: &Board, rank: u8, from_file: u8, to_file: u8) -> bool {
    interior(from_file, to_file).all(|file| !board.get(Square::new(file, rank)).is_blocking())
}

/// No piece strictly between two squares on a shared diagonal
pub fn diagonal_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_file = to.file as i8 - from.file as i8;
    let d_rank = to.rank as i8 - from.rank as i8;
    debug_assert_eq!(
        d_file.abs(),
        d_rank.abs(),
        "diagonal_clear called with {} -> {} which is not a diagonal",
        from,
        to
    );

    interior(from.file, to.file)
        .zip(interior(from.rank, to.rank))
        .all(|(file, rank)| !board.get(Square::new(file, rank)).is_blocking())
}

/// Indices strictly between `from` and `to`, walking from `from` toward `to`
fn interior(from: u8, to: u8) -> impl Iterator<Item = u8> {
    let step: i8 = if to > from { 1 } else { -1 };
    (1..from.abs_diff(to)).map(move |i| (from as i8 + step * i as i8) as u8)
}

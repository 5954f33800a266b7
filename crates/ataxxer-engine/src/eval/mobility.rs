//! Mobility: how many of a side's pieces can still move.

use ataxxer_core::{Board, Color, neighbors};

/// Count the cells holding a `color` piece that has at least one legal move.
///
/// Rays always start at distance 1, so a piece can move exactly when it
/// touches an empty cell. This avoids generating the moves themselves.
pub fn mobility(board: &Board, color: Color) -> u32 {
    let empties = board.empties();
    board
        .side(color)
        .filter(|&sq| (neighbors(sq) & empties).is_nonempty())
        .count() as u32
}

//! Static evaluation for the ataxxer engine.
//!
//! Scores are integers from the perspective of the side passed in: positive
//! favours that side.

pub mod features;
pub mod mobility;
pub mod phase;

use ataxxer_core::{Board, Color, has_any_move};

pub use mobility::mobility;

/// Score bound used for search windows. Every real score lies strictly inside.
pub const INF: i32 = 1_000_000_000;

/// Score of a finished game won by the side being evaluated.
pub const WIN_SCORE: i32 = INF / 2;

/// Weight of a one-piece advantage.
pub const PIECE_WEIGHT: i32 = 100;

/// Weight of a one-cell mobility advantage.
pub const MOBILITY_WEIGHT: i32 = 10;

/// Evaluate `board` from `perspective`'s point of view.
///
/// `100 * (own pieces - opponent pieces) + 10 * (own mobility - opponent mobility)`,
/// where mobility counts cells holding a piece with at least one legal move.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let them = !perspective;
    let pieces = board.count(perspective) as i32 - board.count(them) as i32;
    let moves = mobility(board, perspective) as i32 - mobility(board, them) as i32;
    PIECE_WEIGHT * pieces + MOBILITY_WEIGHT * moves
}

/// Return `true` if neither side has a legal move.
///
/// A full board is always terminal.
pub fn is_terminal(board: &Board) -> bool {
    !has_any_move(board, Color::Red) && !has_any_move(board, Color::Blue)
}

/// Final score of a terminal position for `perspective`.
///
/// [`WIN_SCORE`] for more pieces, `-WIN_SCORE` for fewer, 0 on equal counts.
pub fn terminal_score(board: &Board, perspective: Color) -> i32 {
    let ours = board.count(perspective);
    let theirs = board.count(!perspective);
    match ours.cmp(&theirs) {
        std::cmp::Ordering::Greater => WIN_SCORE,
        std::cmp::Ordering::Less => -WIN_SCORE,
        std::cmp::Ordering::Equal => 0,
    }
}

//! Game phase from the number of empty cells, with per-phase feature weights.

use crate::eval::features::FEATURE_COUNT;

/// Empty-cell count above which the game is still in the opening.
pub const OPENING_MIN_EMPTY: u32 = 33;

/// Empty-cell count above which the game is in the middlegame.
pub const MIDDLE_MIN_EMPTY: u32 = 13;

/// Coarse stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Middle,
    End,
}

/// Feature weights in [`FeatureVector`](crate::eval::features::FeatureVector) order:
/// flips, mobility, corner, edge, frontier, jump, centrality, parity.
///
/// | Phase   | flips | mob | corner | edge | frontier | jump | centre | parity |
/// |---------|-------|-----|--------|------|----------|------|--------|--------|
/// | Opening | 10    | 3   | 4      | 2    | -2       | -8   | 3      | 0      |
/// | Middle  | 12    | 2   | 6      | 3    | -3       | -6   | 1      | 1      |
/// | End     | 16    | 1   | 2      | 1    | -1       | -2   | 0      | 4      |
const WEIGHTS: [[i32; FEATURE_COUNT]; 3] = [
    [10, 3, 4, 2, -2, -8, 3, 0],
    [12, 2, 6, 3, -3, -6, 1, 1],
    [16, 1, 2, 1, -1, -2, 0, 4],
];

impl Phase {
    /// Classify a position by its number of empty cells.
    ///
    /// More than 32 empties is the opening, more than 12 the middlegame,
    /// anything else the endgame.
    pub const fn from_empty_count(empty: u32) -> Phase {
        if empty >= OPENING_MIN_EMPTY {
            Phase::Opening
        } else if empty >= MIDDLE_MIN_EMPTY {
            Phase::Middle
        } else {
            Phase::End
        }
    }

    /// Weight vector for this phase.
    pub const fn weights(self) -> &'static [i32; FEATURE_COUNT] {
        &WEIGHTS[self as usize]
    }
}

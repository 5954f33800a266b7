//! Single-ply beam selection over phase-weighted move features.

use ataxxer_core::{Board, Color, MAX_MOVES, Move, generate_moves};
use tracing::{debug, trace};

use crate::eval::features::FeatureVector;
use crate::eval::mobility::mobility;
use crate::eval::phase::Phase;

/// Default number of candidates kept after scoring.
pub const DEFAULT_BEAM_WIDTH: usize = 16;

/// Opponent mobility lead beyond which a candidate may be suicidal.
pub const SUICIDE_MOBILITY_GAP: i32 = 70;

/// A candidate with that lead against it is rejected below this own mobility.
pub const SUICIDE_MIN_MOBILITY: i32 = 5;

/// Outcome of one beam selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamResult {
    /// Chosen move, `None` when the side to move must pass.
    pub best_move: Option<Move>,
    /// Feature score of the chosen move.
    pub score: i32,
    /// Candidates scored.
    pub scored: usize,
    /// Beam members rejected by the anti-suicide filter.
    pub rejected: usize,
}

/// Picks a move by scoring every candidate one ply deep.
///
/// Each legal move is scored by the dot product of its [`FeatureVector`]
/// with the weights of the phase it leads into. The best `width` are then
/// walked in order and the first one that does not leave the mover nearly
/// immobile against a much freer opponent is played.
#[derive(Debug, Clone, Copy)]
pub struct BeamSelector {
    width: usize,
}

impl BeamSelector {
    /// Create a selector keeping the top `width` candidates (at least one).
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    /// Beam width of this selector.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Select a move for `color`.
    pub fn select(&self, board: &Board, color: Color) -> BeamResult {
        let moves = generate_moves(board, color);
        if moves.is_empty() {
            debug!(%color, "no legal move");
            return BeamResult {
                best_move: None,
                score: 0,
                scored: 0,
                rejected: 0,
            };
        }

        // Clone and jump both count as one fewer empty cell here.
        let empty_after = board.empty_count().saturating_sub(1);
        let phase = Phase::from_empty_count(empty_after);
        let weights = phase.weights();

        let mut candidates = [(Move::NULL, 0i32); MAX_MOVES];
        let len = moves.len();
        for (slot, &mv) in candidates.iter_mut().zip(moves.as_slice()) {
            let after = board.make_move(mv, color);
            let features = FeatureVector::extract(board, &after, mv, color, empty_after);
            *slot = (mv, features.score(weights));
        }
        let candidates = &mut candidates[..len];

        // Partial selection sort: the first `beam` slots end up holding the
        // best scores in descending order, earliest generated first on ties.
        let beam = self.width.min(len);
        for i in 0..beam {
            let mut best = i;
            for j in (i + 1)..len {
                if candidates[j].1 > candidates[best].1 {
                    best = j;
                }
            }
            candidates[i..=best].rotate_right(1);
        }

        debug!(?phase, empty_after, scored = len, beam, "beam scored");

        let mut rejected = 0;
        for &(mv, score) in &candidates[..beam] {
            let after = board.make_move(mv, color);
            let ours = mobility(&after, color) as i32;
            let theirs = mobility(&after, !color) as i32;
            if is_suicidal(ours, theirs) {
                trace!(mv = %mv, score, ours, theirs, "rejected as suicidal");
                rejected += 1;
                continue;
            }
            return BeamResult {
                best_move: Some(mv),
                score,
                scored: len,
                rejected,
            };
        }

        let (mv, score) = candidates[0];
        debug!(mv = %mv, score, "whole beam rejected, playing top candidate");
        BeamResult {
            best_move: Some(mv),
            score,
            scored: len,
            rejected,
        }
    }
}

/// A move is suicidal when it leaves the mover nearly stuck against a far
/// freer opponent. Mobility here is the cell count of [`mobility`].
fn is_suicidal(ours: i32, theirs: i32) -> bool {
    theirs - ours > SUICIDE_MOBILITY_GAP && ours < SUICIDE_MIN_MOBILITY
}

impl Default for BeamSelector {
    fn default() -> Self {
        Self::new(DEFAULT_BEAM_WIDTH)
    }
}

//! Single-ply move features for the beam selector.

use std::sync::OnceLock;

use ataxxer_core::{Bitboard, Board, Color, Move, Square, neighbors};

use crate::eval::mobility::mobility;

/// Number of features in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 8;

/// Static facts about one square.
#[derive(Debug, Clone, Copy, Default)]
struct SquareInfo {
    /// Cells whose emptiness makes a piece here part of the frontier.
    frontier: Bitboard,
    corner: bool,
    edge: bool,
    /// 0 on the rim up to 3 in the central 2x2.
    centrality: i32,
}

static SQUARE_INFO: OnceLock<[SquareInfo; 64]> = OnceLock::new();

fn square_info() -> &'static [SquareInfo; 64] {
    SQUARE_INFO.get_or_init(|| {
        let mut table = [SquareInfo::default(); 64];
        for sq in Square::all() {
            let corner = Bitboard::CORNERS.contains(sq);
            let r = 2 * sq.row() as i32 - 7;
            let c = 2 * sq.col() as i32 - 7;
            table[sq.index()] = SquareInfo {
                frontier: neighbors(sq),
                corner,
                edge: Bitboard::BORDER.contains(sq) && !corner,
                centrality: (7 - r.abs().max(c.abs())) / 2,
            };
        }
        table
    })
}

/// Features of one candidate move, all from the mover's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureVector {
    /// Opponent pieces adjacent to the destination before the move.
    pub flips: i32,
    /// Own mobility minus the opponent's, after the move.
    pub mobility: i32,
    pub corner: i32,
    pub edge: i32,
    /// Own pieces touching an empty cell after the move.
    pub frontier: i32,
    pub jump: i32,
    pub centrality: i32,
    /// +1 when the empty count after the move is even, -1 when odd.
    pub parity: i32,
}

impl FeatureVector {
    /// Extract the features of `mv` for `color`.
    ///
    /// `after` must be `before.make_move(mv, color)`.
    pub fn extract(before: &Board, after: &Board, mv: Move, color: Color, empty_after: u32) -> FeatureVector {
        let table = square_info();
        let dest = &table[mv.dest().index()];
        let empties = after.empties();

        let frontier = after
            .side(color)
            .filter(|sq| (table[sq.index()].frontier & empties).is_nonempty())
            .count() as i32;

        FeatureVector {
            flips: before.flip_count(mv, color) as i32,
            mobility: mobility(after, color) as i32 - mobility(after, !color) as i32,
            corner: dest.corner as i32,
            edge: dest.edge as i32,
            frontier,
            jump: mv.is_jump() as i32,
            centrality: dest.centrality,
            parity: if empty_after % 2 == 0 { 1 } else { -1 },
        }
    }

    /// Features in weight order.
    pub fn to_array(self) -> [i32; FEATURE_COUNT] {
        [
            self.flips,
            self.mobility,
            self.corner,
            self.edge,
            self.frontier,
            self.jump,
            self.centrality,
            self.parity,
        ]
    }

    /// Dot product with `weights`.
    pub fn score(self, weights: &[i32; FEATURE_COUNT]) -> i32 {
        self.to_array()
            .iter()
            .zip(weights)
            .map(|(f, w)| f * w)
            .sum()
    }
}

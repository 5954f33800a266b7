//! Move execution via copy-make.

use crate::bitboard::neighbors;
use crate::board::Board;
use crate::color::Color;
use crate::game_move::Move;

impl Board {
    /// Apply `mv` for `color` and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The destination takes `color`; a jump also empties the source. Every
    /// opponent piece adjacent to the destination then flips to `color`.
    /// Flips are a single layer: a flipped piece does not flip its own neighbors.
    ///
    /// Legality is not checked; callers pass moves from
    /// [`generate_moves`](crate::generate_moves).
    pub fn make_move(&self, mv: Move, color: Color) -> Board {
        let mut us = self.side(color);
        let mut them = self.side(!color);
        let src = mv.source();
        let dst = mv.dest();

        if mv.is_jump() {
            us = us.without(src);
        }
        us = us.with(dst);
        them = them.without(dst);

        let flipped = neighbors(dst) & them;
        us |= flipped;
        them &= !flipped;

        let mut sides = [us, them];
        if color.index() == 1 {
            sides.swap(0, 1);
        }

        let mut b = *self;
        b.set_sides(sides);
        b
    }

    /// Number of opponent pieces `mv` would flip for `color`.
    #[inline]
    pub fn flip_count(&self, mv: Move, color: Color) -> u32 {
        (neighbors(mv.dest()) & self.side(!color)).count()
    }
}

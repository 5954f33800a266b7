//! Board cells addressed in row-major order.

use std::fmt;

use crate::bitboard::Bitboard;

/// A square on the 8x8 board, encoded as `row * 8 + col`.
///
/// Row 0 is the first row of a snapshot; column 0 its first character.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Board side length.
    pub const SIDE: u8 = 8;

    /// Create a square from row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Square(row * Self::SIDE + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based row.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Zero-based column.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Step by `(dr, dc)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row() as i8 + dr;
        let c = self.col() as i8 + dc;
        if r >= 0 && r < 8 && c >= 0 && c < 8 {
            Some(Square((r as u8) * Self::SIDE + c as u8))
        } else {
            None
        }
    }

    /// King-distance (Chebyshev distance) between two squares.
    #[inline]
    pub const fn distance(self, other: Square) -> u8 {
        let dr = self.row().abs_diff(other.row());
        let dc = self.col().abs_diff(other.col());
        if dr > dc { dr } else { dc }
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    /// Column letter followed by the 1-based row, so `(0, 0)` prints as `a1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn row_major_index() {
        assert_eq!(sq(0, 0).index(), 0);
        assert_eq!(sq(0, 7).index(), 7);
        assert_eq!(sq(1, 0).index(), 8);
        assert_eq!(sq(7, 7).index(), 63);
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(sq(3, 3).offset(-1, 1), Some(sq(2, 4)));
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(7, 6).offset(0, 2), None);
    }

    #[test]
    fn king_distance() {
        assert_eq!(sq(3, 3).distance(sq(3, 3)), 0);
        assert_eq!(sq(3, 3).distance(sq(4, 4)), 1);
        assert_eq!(sq(3, 3).distance(sq(5, 4)), 2);
        assert_eq!(sq(0, 0).distance(sq(7, 2)), 7);
    }

    #[test]
    fn display() {
        assert_eq!(sq(0, 0).to_string(), "a1");
        assert_eq!(sq(7, 7).to_string(), "h8");
        assert_eq!(sq(2, 4).to_string(), "e3");
    }

    #[test]
    fn all_yields_64() {
        assert_eq!(Square::all().count(), Square::COUNT);
    }
}

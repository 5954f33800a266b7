//! Clone and jump moves, bit-packed into a u16.

use std::fmt;

use crate::error::MoveError;
use crate::square::Square;

// Private bit-field constants.
const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const JUMP_BIT: u16 = 0x1000;
const DST_SHIFT: u32 = 6;

/// The category of a move, fixed by the king-distance it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Distance 1: a copy lands on the destination, the source keeps its piece.
    Clone = 0,
    /// Distance 2: the piece relocates and the source becomes empty.
    Jump = 1,
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// bit   12:   jump flag
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Placeholder value (a1 to a1) used to fill fixed-size buffers. Never a legal move.
    pub const NULL: Move = Move(0);

    /// Create a move between two squares, deriving the kind from their distance.
    ///
    /// Returns `None` unless the king-distance is 1 (clone) or 2 (jump).
    pub const fn new(source: Square, dest: Square) -> Option<Move> {
        let bits = (source.index() as u16) | ((dest.index() as u16) << DST_SHIFT);
        match source.distance(dest) {
            1 => Some(Move(bits)),
            2 => Some(Move(bits | JUMP_BIT)),
            _ => None,
        }
    }

    /// Decode 1-indexed wire coordinates `(sx, sy)` to `(tx, ty)`.
    ///
    /// `x` is the row and `y` the column, both in `1..=8`.
    pub fn from_wire(sx: u8, sy: u8, tx: u8, ty: u8) -> Result<Move, MoveError> {
        let square = |x: u8, y: u8| {
            x.checked_sub(1)
                .zip(y.checked_sub(1))
                .and_then(|(r, c)| Square::new(r, c))
                .ok_or(MoveError::OutOfRange { x, y })
        };
        let source = square(sx, sy)?;
        let dest = square(tx, ty)?;
        Move::new(source, dest).ok_or(MoveError::BadDistance {
            distance: source.distance(dest),
        })
    }

    /// Encode as 1-indexed wire coordinates `(sx, sy, tx, ty)`.
    pub const fn to_wire(self) -> (u8, u8, u8, u8) {
        let src = self.source();
        let dst = self.dest();
        (src.row() + 1, src.col() + 1, dst.row() + 1, dst.col() + 1)
    }

    /// Extract the source square.
    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Extract the move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        if self.is_jump() { MoveKind::Jump } else { MoveKind::Clone }
    }

    /// Return `true` if the move vacates its source.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.0 & JUMP_BIT != 0
    }

    /// Return `true` if this is the placeholder value.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else {
            write!(f, "{}{}", self.source(), self.dest())
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind())
    }
}

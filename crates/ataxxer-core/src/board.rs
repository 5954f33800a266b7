//! The game board: which cells each side occupies.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::color::Color;
use crate::square::Square;

/// Complete position state. A plain value: copy it freely.
///
/// The side to move is not part of the position; every operation that
/// depends on it takes a [`Color`] argument.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
}

impl Board {
    /// A board with every cell empty.
    pub const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; Color::COUNT],
        }
    }

    /// The usual opening setup: Red on a1 and h8, Blue on h1 and a8.
    pub fn starting_position() -> Board {
        let corner = |row, col| Square::new(row, col).map_or(Bitboard::EMPTY, Square::bitboard);
        Board {
            sides: [corner(0, 0) | corner(7, 7), corner(0, 7) | corner(7, 0)],
        }
    }

    /// Return what occupies `sq`.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        if self.sides[Color::Red.index()].contains(sq) {
            Cell::Occupied(Color::Red)
        } else if self.sides[Color::Blue.index()].contains(sq) {
            Cell::Occupied(Color::Blue)
        } else {
            Cell::Empty
        }
    }

    /// Overwrite the contents of `sq`.
    pub fn set_cell(&mut self, sq: Square, cell: Cell) {
        for side in &mut self.sides {
            *side = side.without(sq);
        }
        if let Cell::Occupied(color) = cell {
            self.sides[color.index()] = self.sides[color.index()].with(sq);
        }
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Return the empty squares bitboard.
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !self.occupied()
    }

    /// Number of pieces held by `color`.
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.sides[color.index()].count()
    }

    /// Number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.empties().count()
    }

    /// Replace both sides at once.
    #[inline]
    pub(crate) fn set_sides(&mut self, sides: [Bitboard; Color::COUNT]) {
        debug_assert!((sides[0] & sides[1]).is_empty(), "sides overlap");
        self.sides = sides;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 1 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", row + 1)?;
            for col in 0u8..8 {
                let c = Square::new(row, col).map_or('?', |sq| board.cell(sq).symbol());
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_position_corners() {
        let board = Board::starting_position();
        assert_eq!(board.cell(sq(0, 0)), Cell::Occupied(Color::Red));
        assert_eq!(board.cell(sq(7, 7)), Cell::Occupied(Color::Red));
        assert_eq!(board.cell(sq(0, 7)), Cell::Occupied(Color::Blue));
        assert_eq!(board.cell(sq(7, 0)), Cell::Occupied(Color::Blue));
        assert_eq!(board.cell(sq(3, 3)), Cell::Empty);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn set_cell_replaces_owner() {
        let mut board = Board::empty();
        board.set_cell(sq(2, 2), Cell::Occupied(Color::Red));
        assert_eq!(board.count(Color::Red), 1);
        board.set_cell(sq(2, 2), Cell::Occupied(Color::Blue));
        assert_eq!(board.count(Color::Red), 0);
        assert_eq!(board.count(Color::Blue), 1);
        board.set_cell(sq(2, 2), Cell::Empty);
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn empties_complement_occupied() {
        let board = Board::starting_position();
        assert_eq!((board.empties() & board.occupied()).count(), 0);
        assert_eq!(board.empties().count() + board.occupied().count(), 64);
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("1  R . . . . . . B"));
        assert!(output.contains("8  B . . . . . . R"));
        assert!(output.contains("a b c d e f g h"));
    }
}

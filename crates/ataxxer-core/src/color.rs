//! Side colors.

use std::fmt;
use std::ops::Not;

/// One of the two sides: Red moves the `R` pieces, Blue the `B` pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Blue = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// Return the index (0 for Red, 1 for Blue).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Snapshot symbol for a cell held by this color.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }

    /// Parse a snapshot symbol, `R` or `B`.
    pub const fn from_symbol(c: char) -> Option<Color> {
        match c {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

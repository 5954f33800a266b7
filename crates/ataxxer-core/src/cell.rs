//! Contents of a single board cell.

use std::fmt;

use crate::color::Color;

/// A cell is either empty or holds a piece of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    /// Snapshot symbol: `.`, `R` or `B`.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(color) => color.symbol(),
        }
    }

    /// Parse a snapshot symbol.
    pub const fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            _ => match Color::from_symbol(c) {
                Some(color) => Some(Cell::Occupied(color)),
                None => None,
            },
        }
    }

    /// The owning color, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }

    /// Return `true` for an empty cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Cell {
        Cell::Occupied(color)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

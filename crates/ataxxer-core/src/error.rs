//! Error types for snapshot parsing and wire-move decoding.

/// Errors that occur when parsing a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot does not have exactly 8 rows.
    #[error("expected 8 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 8 cells.
    #[error("row {row} has {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// A cell symbol is not `.`, `R` or `B`.
    #[error("invalid cell character '{character}' in row {row}")]
    InvalidCellChar {
        /// Zero-based row index.
        row: usize,
        /// The offending character.
        character: char,
    },
}

/// Errors from decoding a move given in wire coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A coordinate pair lies outside `1..=8`.
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfRange {
        /// Wire row.
        x: u8,
        /// Wire column.
        y: u8,
    },
    /// Source and destination are not 1 or 2 steps apart.
    #[error("move spans distance {distance}, expected 1 or 2")]
    BadDistance {
        /// King-distance between source and destination.
        distance: u8,
    },
}

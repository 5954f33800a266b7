//! Row-snapshot parsing and serialization for [`Board`].
//!
//! A snapshot is eight rows of eight symbols (`.`, `R`, `B`), the same shape
//! the referee sends each turn. As a single string the rows are separated by
//! `/` or whitespace.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::SnapshotError;
use crate::square::Square;

/// Snapshot of [`Board::starting_position`].
pub const STARTING_SNAPSHOT: &str =
    "R......B/......../......../......../......../......../......../B......R";

impl Board {
    /// Build a board from eight row strings.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, SnapshotError> {
        if rows.len() != 8 {
            return Err(SnapshotError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let length = text.chars().count();
            if length != 8 {
                return Err(SnapshotError::BadRowLength { row, length });
            }
            for (col, character) in text.chars().enumerate() {
                let cell = Cell::from_symbol(character)
                    .ok_or(SnapshotError::InvalidCellChar { row, character })?;
                // row and col are both < 8 here
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board.set_cell(sq, cell);
                }
            }
        }
        Ok(board)
    }

    /// Serialize as eight row strings.
    pub fn to_rows(&self) -> [String; 8] {
        std::array::from_fn(|row| {
            (0u8..8)
                .filter_map(|col| Square::new(row as u8, col))
                .map(|sq| self.cell(sq).symbol())
                .collect()
        })
    }
}

impl FromStr for Board {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Board, SnapshotError> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_SNAPSHOT;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::error::SnapshotError;
    use crate::square::Square;

    fn roundtrip(snapshot: &str) {
        let board: Board = snapshot.parse().unwrap();
        let output = format!("{board}");
        assert_eq!(output, snapshot, "snapshot roundtrip failed");
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_SNAPSHOT);
    }

    #[test]
    fn roundtrip_midgame() {
        roundtrip("RRR..B.B/RR.BBB../..R...../...RB.../......../.BB...../B.....RR/BB.....R");
    }

    #[test]
    fn starting_position_matches_snapshot() {
        let parsed: Board = STARTING_SNAPSHOT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn whitespace_separated_rows() {
        let text = STARTING_SNAPSHOT.replace('/', "\n");
        let board: Board = text.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn from_rows_places_cells() {
        let rows = [
            "........", "........", "........", "...RB...",
            "........", "........", "........", "........",
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.cell(Square::new(3, 3).unwrap()), Cell::Occupied(Color::Red));
        assert_eq!(board.cell(Square::new(3, 4).unwrap()), Cell::Occupied(Color::Blue));
        assert_eq!(board.to_rows()[3], "...RB...");
    }

    #[test]
    fn error_wrong_row_count() {
        let result = "......../........".parse::<Board>();
        assert_eq!(result, Err(SnapshotError::WrongRowCount { found: 2 }));
    }

    #[test]
    fn error_bad_row_length() {
        let result = "R......B/......./......../......../......../......../......../B......R"
            .parse::<Board>();
        assert_eq!(result, Err(SnapshotError::BadRowLength { row: 1, length: 7 }));
    }

    #[test]
    fn error_invalid_cell_char() {
        let result = "R......B/...#..../......../......../......../......../......../B......R"
            .parse::<Board>();
        assert_eq!(
            result,
            Err(SnapshotError::InvalidCellChar { row: 1, character: '#' })
        );
    }

    #[test]
    fn error_lowercase_symbol() {
        let result = "r......B/......../......../......../......../......../......../B......R"
            .parse::<Board>();
        assert_eq!(
            result,
            Err(SnapshotError::InvalidCellChar { row: 0, character: 'r' })
        );
    }
}

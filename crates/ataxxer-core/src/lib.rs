//! Core Ataxx types: board representation, move generation, and game rules.

mod bitboard;
mod board;
mod cell;
mod color;
mod error;
mod game_move;
mod make_move;
mod movegen;
pub mod perft;
mod snapshot;
mod square;

pub use bitboard::{Bitboard, neighbors};
pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use color::Color;
pub use error::{MoveError, SnapshotError};
pub use game_move::{Move, MoveKind};
pub use movegen::{MAX_MOVES, MoveList, count_moves, generate_moves, has_any_move, is_legal};
pub use snapshot::STARTING_SNAPSHOT;
pub use square::Square;

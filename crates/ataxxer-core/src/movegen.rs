//! Legal move generation.

use crate::bitboard::{Bitboard, neighbors};
use crate::board::Board;
use crate::color::Color;
use crate::game_move::Move;
use crate::square::Square;

/// Capacity of a [`MoveList`].
///
/// One side reaches any empty cell along at most 8 rays, so it can never
/// have more than `8 * 63` moves; real positions stay far below this.
pub const MAX_MOVES: usize = 512;

/// Ray directions in scan order: up-left, up, up-right, left, right,
/// down-left, down, down-right.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Stack-allocated buffer for generated moves.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Visit every destination reachable from `src` on a board whose empty cells are `empties`.
///
/// Each ray is walked out to distance 2 and stops at the first occupied cell
/// or the board edge, so a piece at distance 1 shields the cell behind it.
#[inline]
fn for_each_destination(src: Square, empties: Bitboard, mut visit: impl FnMut(Square)) {
    for (dr, dc) in DIRECTIONS {
        let mut cursor = src;
        for _ in 0..2 {
            match cursor.offset(dr, dc) {
                Some(next) if empties.contains(next) => {
                    visit(next);
                    cursor = next;
                }
                _ => break,
            }
        }
    }
}

/// Generate all legal moves for `color`, sources in row-major order.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    let empties = board.empties();
    for src in board.side(color) {
        for_each_destination(src, empties, |dest| {
            if let Some(mv) = Move::new(src, dest) {
                list.push(mv);
            }
        });
    }
    list
}

/// Count the legal moves for `color` without materializing them.
pub fn count_moves(board: &Board, color: Color) -> u32 {
    let empties = board.empties();
    let mut count = 0;
    for src in board.side(color) {
        for_each_destination(src, empties, |_| count += 1);
    }
    count
}

/// Return `true` if `color` has at least one legal move.
///
/// Every ray starts at distance 1, so a side can move exactly when one of its
/// pieces touches an empty cell.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    let empties = board.empties();
    board
        .side(color)
        .any(|sq| (neighbors(sq) & empties).is_nonempty())
}

/// Return `true` if `mv` is a legal move for `color`.
pub fn is_legal(board: &Board, mv: Move, color: Color) -> bool {
    let src = mv.source();
    if !board.side(color).contains(src) {
        return false;
    }
    let mut found = false;
    for_each_destination(src, board.empties(), |dest| found |= dest == mv.dest());
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::game_move::MoveKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board_with(pieces: &[(u8, u8, Color)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, color) in pieces {
            board.set_cell(sq(row, col), Cell::Occupied(color));
        }
        board
    }

    #[test]
    fn starting_position_12_moves() {
        let board = Board::starting_position();
        let moves = generate_moves(&board, Color::Red);
        assert_eq!(moves.len(), 12, "each corner piece has 3 rays of 2 cells");
        assert_eq!(count_moves(&board, Color::Blue), 12);
    }

    #[test]
    fn lone_center_piece_16_moves() {
        let board = board_with(&[(3, 3, Color::Red)]);
        let moves = generate_moves(&board, Color::Red);
        assert_eq!(moves.len(), 16);
        let jumps = moves.as_slice().iter().filter(|m| m.is_jump()).count();
        assert_eq!(jumps, 8);
    }

    #[test]
    fn jump_flag_matches_distance() {
        let board = Board::starting_position();
        for mv in &generate_moves(&board, Color::Blue) {
            let distance = mv.source().distance(mv.dest());
            assert_eq!(mv.kind() == MoveKind::Jump, distance == 2);
            assert!(board.cell(mv.dest()).is_empty());
        }
    }

    #[test]
    fn adjacent_piece_blocks_ray() {
        // Red (3,3) with Blue on (3,4): neither (3,4) nor (3,5) is reachable eastward.
        let board = board_with(&[(3, 3, Color::Red), (3, 4, Color::Blue)]);
        let moves = generate_moves(&board, Color::Red);
        assert_eq!(moves.len(), 14);
        assert!(!moves.as_slice().iter().any(|m| m.dest() == sq(3, 5)));
    }

    #[test]
    fn scan_order_is_deterministic() {
        let board = board_with(&[(3, 3, Color::Red)]);
        let moves = generate_moves(&board, Color::Red);
        // up-left ray first: clone to (2,2) then jump to (1,1)
        assert_eq!(moves[0].dest(), sq(2, 2));
        assert_eq!(moves[1].dest(), sq(1, 1));
        assert_eq!(moves[15].dest(), sq(5, 5));
    }

    #[test]
    fn boxed_in_side_has_no_moves() {
        // Red on a1 surrounded by Blue.
        let board = board_with(&[
            (0, 0, Color::Red),
            (0, 1, Color::Blue),
            (1, 0, Color::Blue),
            (1, 1, Color::Blue),
        ]);
        assert!(!has_any_move(&board, Color::Red));
        assert!(generate_moves(&board, Color::Red).is_empty());
        assert!(has_any_move(&board, Color::Blue));
    }

    #[test]
    fn has_any_move_agrees_with_generation() {
        let boards = [
            Board::starting_position(),
            Board::empty(),
            board_with(&[(0, 0, Color::Red), (0, 1, Color::Blue)]),
        ];
        for board in boards {
            for color in Color::ALL {
                assert_eq!(
                    has_any_move(&board, color),
                    !generate_moves(&board, color).is_empty(),
                    "disagreement on {board:?} for {color}"
                );
            }
        }
    }

    #[test]
    fn legality_check() {
        let board = Board::starting_position();
        let ok = Move::new(sq(0, 0), sq(2, 2)).unwrap();
        let wrong_owner = Move::new(sq(0, 7), sq(1, 7)).unwrap();
        let off_ray = Move::new(sq(0, 0), sq(1, 2)).unwrap();
        assert!(is_legal(&board, ok, Color::Red));
        assert!(!is_legal(&board, wrong_owner, Color::Red));
        assert!(!is_legal(&board, off_ray, Color::Red));
    }
}

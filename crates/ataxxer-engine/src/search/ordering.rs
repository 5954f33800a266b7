//! Move ordering by static evaluation of the resulting position.

use ataxxer_core::{Board, Color, MAX_MOVES, Move, MoveList};

use crate::eval::evaluate;

/// Score of `mv` for ordering: the position after it, evaluated for the mover.
#[inline]
pub fn static_score(board: &Board, mv: Move, color: Color) -> i32 {
    evaluate(&board.make_move(mv, color), color)
}

/// Moves sorted by [`static_score`], best first.
///
/// Sorting is stable, so equal scores keep generation order and the search
/// stays deterministic. Everything lives in fixed arrays; nothing allocates.
pub struct MovePicker {
    moves: [Move; MAX_MOVES],
    scores: [i32; MAX_MOVES],
    len: usize,
    cursor: usize,
}

impl MovePicker {
    /// Score and sort `moves` for `color` on `board`.
    pub fn new(moves: &MoveList, board: &Board, color: Color) -> Self {
        let mut picker = Self {
            moves: [Move::NULL; MAX_MOVES],
            scores: [0; MAX_MOVES],
            len: moves.len(),
            cursor: 0,
        };

        // Insertion sort, descending. Strict comparison keeps ties in place.
        for (i, &mv) in moves.as_slice().iter().enumerate() {
            let score = static_score(board, mv, color);
            let mut j = i;
            while j > 0 && picker.scores[j - 1] < score {
                picker.moves[j] = picker.moves[j - 1];
                picker.scores[j] = picker.scores[j - 1];
                j -= 1;
            }
            picker.moves[j] = mv;
            picker.scores[j] = score;
        }
        picker
    }

    /// Yield the next move in order.
    #[inline]
    pub fn pick_next(&mut self) -> Option<Move> {
        if self.cursor >= self.len {
            return None;
        }
        let mv = self.moves[self.cursor];
        self.cursor += 1;
        Some(mv)
    }

    /// All moves in order, regardless of how many were picked.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Static scores aligned with [`as_slice`](Self::as_slice).
    pub fn scores(&self) -> &[i32] {
        &self.scores[..self.len]
    }

    /// Return the number of moves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if there are no moves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

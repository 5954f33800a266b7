//! Perft (performance test) for move generation correctness verification.

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{generate_moves, has_any_move};

/// Count the number of leaf nodes at the given depth with `color` to move.
///
/// Depth 0 returns 1. A side without moves passes, which consumes a ply;
/// a position where neither side can move is a single leaf.
pub fn perft(board: &Board, color: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, color);

    if moves.is_empty() {
        if !has_any_move(board, !color) {
            return 1;
        }
        return perft(board, !color, depth - 1);
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.as_slice() {
        let child = board.make_move(*mv, color);
        nodes += perft(&child, !color, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, color: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_moves(board, color);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            let child = board.make_move(*mv, color);
            let count = if depth <= 1 { 1 } else { perft(&child, !color, depth - 1) };
            debug!(mv = %mv, nodes = count, "divide");
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

//! Negamax alpha-beta search.

use ataxxer_core::{Board, Color, generate_moves, has_any_move};

use crate::eval::{evaluate, terminal_score};
use crate::search::control::SearchControl;
use crate::search::ordering::MovePicker;

pub use crate::eval::{INF, WIN_SCORE};

/// Hard cap on iterative-deepening depth.
pub const MAX_DEPTH: u8 = 8;

/// Mutable state threaded through one search.
pub(super) struct SearchContext<'a> {
    pub nodes: u64,
    pub control: &'a SearchControl,
}

/// Negamax alpha-beta search.
///
/// Returns the value of `board` for `mover`. Once the deadline passes every
/// node returns its static evaluation, so an abandoned branch still yields a
/// comparable score. A pass hands the turn over without consuming depth.
pub(super) fn negamax(
    board: &Board,
    mover: Color,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || ctx.control.expired() {
        return evaluate(board, mover);
    }

    let moves = generate_moves(board, mover);

    if moves.is_empty() {
        if !has_any_move(board, !mover) {
            return terminal_score(board, mover);
        }
        return -negamax(board, !mover, depth, -beta, -alpha, ctx);
    }

    let mut picker = MovePicker::new(&moves, board, mover);
    let mut best = -INF;

    while let Some(mv) = picker.pick_next() {
        let child = board.make_move(mv, mover);
        let score = -negamax(&child, !mover, depth - 1, -beta, -alpha, ctx);

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta || ctx.control.expired() {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ataxxer_core::{Board, Color};

    use super::*;

    fn search(board: &Board, mover: Color, depth: u8) -> (i32, u64) {
        let control = SearchControl::new_infinite();
        let mut ctx = SearchContext { nodes: 0, control: &control };
        let score = negamax(board, mover, depth, -INF, INF, &mut ctx);
        (score, ctx.nodes)
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let board = Board::starting_position();
        assert_eq!(search(&board, Color::Red, 0), (evaluate(&board, Color::Red), 1));
    }

    #[test]
    fn double_pass_scores_terminal() {
        let board: Board = "RRRRRRRR/RRRRRRRR/RRRRRRRR/RRRRRRRR/RRRRRRRR/BBBBBBBB/BBBBBBBB/BBBBBBBB"
            .parse()
            .unwrap();
        assert_eq!(search(&board, Color::Red, 3).0, WIN_SCORE);
        assert_eq!(search(&board, Color::Blue, 3).0, -WIN_SCORE);
    }

    #[test]
    fn pass_keeps_depth() {
        // Red is boxed in; its value at depth 1 is minus Blue's value at depth 1.
        let board: Board = "RB....../BB....../......../......../......../......../......../........"
            .parse()
            .unwrap();
        let (red, _) = search(&board, Color::Red, 1);
        let (blue, _) = search(&board, Color::Blue, 1);
        assert_eq!(red, -blue);
    }

    #[test]
    fn expired_deadline_returns_static_eval() {
        let board = Board::starting_position();
        let control = SearchControl::new_timed(Duration::ZERO);
        let mut ctx = SearchContext { nodes: 0, control: &control };
        let score = negamax(&board, Color::Red, 6, -INF, INF, &mut ctx);
        assert_eq!(score, evaluate(&board, Color::Red));
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn alpha_beta_matches_full_window_minimax() {
        fn minimax(board: &Board, mover: Color, depth: u8) -> i32 {
            if depth == 0 {
                return evaluate(board, mover);
            }
            let moves = generate_moves(board, mover);
            if moves.is_empty() {
                if !has_any_move(board, !mover) {
                    return terminal_score(board, mover);
                }
                return -minimax(board, !mover, depth);
            }
            moves
                .as_slice()
                .iter()
                .map(|&mv| -minimax(&board.make_move(mv, mover), !mover, depth - 1))
                .max()
                .unwrap_or(-INF)
        }

        let board: Board = "R......./.B....../......../......../......../......../......../.......R"
            .parse()
            .unwrap();
        for depth in 1..=3 {
            assert_eq!(search(&board, Color::Blue, depth).0, minimax(&board, Color::Blue, depth));
        }
    }
}

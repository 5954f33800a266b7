//! Search algorithms and move ordering.

pub mod beam;
pub mod control;
pub mod negamax;
pub mod ordering;

use ataxxer_core::{Board, Color, Move, generate_moves};
use tracing::debug;

use control::SearchControl;
use negamax::{INF, MAX_DEPTH, SearchContext, negamax};
use ordering::MovePicker;

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move must pass.
    pub best_move: Option<Move>,
    /// Score from the mover's perspective.
    pub score: i32,
    /// Deepest fully completed depth, 0 if none completed.
    pub depth: u8,
    /// Total nodes visited.
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a side with no legal move.
    pub const fn pass() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Iterative-deepening alpha-beta searcher.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    max_depth: u8,
}

impl Searcher {
    /// Create a searcher capped at `max_depth`, clamped to `1..=MAX_DEPTH`.
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth: max_depth.clamp(1, MAX_DEPTH),
        }
    }

    /// Depth cap of this searcher.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Run iterative-deepening search for `color`.
    ///
    /// Calls `on_iter(depth, score, nodes, best)` after each completed
    /// depth. A depth counts only if every root candidate was searched
    /// before the deadline. If not even depth 1 completes, the best of its
    /// partial pass is used, and failing that the first ordered move.
    pub fn search<F>(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        mut on_iter: F,
    ) -> SearchResult
    where
        F: FnMut(u8, i32, u64, Move),
    {
        let moves = generate_moves(board, color);
        if moves.is_empty() {
            debug!(%color, "no legal move");
            return SearchResult::pass();
        }

        // Static ordering does not depend on depth.
        let picker = MovePicker::new(&moves, board, color);
        let mut ctx = SearchContext { nodes: 0, control };

        let mut completed: Option<(Move, i32, u8)> = None;
        let mut partial: Option<(Move, i32)> = None;

        for depth in 1..=self.max_depth {
            if control.expired() {
                break;
            }

            let pass = root_pass(board, color, picker.as_slice(), depth, &mut ctx);
            match pass.best {
                Some((mv, score)) if pass.complete => {
                    debug!(
                        depth,
                        score,
                        nodes = ctx.nodes,
                        elapsed_ms = control.elapsed().as_millis() as u64,
                        mv = %mv,
                        "depth complete"
                    );
                    completed = Some((mv, score, depth));
                    on_iter(depth, score, ctx.nodes, mv);
                }
                _ => {
                    debug!(depth, nodes = ctx.nodes, "depth abandoned at deadline");
                    if completed.is_none() {
                        partial = pass.best;
                    }
                    break;
                }
            }
        }

        let (best_move, score, depth) = settle(completed, partial, &picker);
        SearchResult {
            best_move: Some(best_move),
            score,
            depth,
            nodes: ctx.nodes,
        }
    }
}

/// Outcome of searching the root candidates at one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RootPass {
    best: Option<(Move, i32)>,
    /// Every candidate was searched before the deadline.
    complete: bool,
}

/// Search each of `candidates` to `depth` with a full window, stopping at
/// the deadline. Ties keep the earlier candidate.
fn root_pass(
    board: &Board,
    color: Color,
    candidates: &[Move],
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> RootPass {
    let mut best: Option<(Move, i32)> = None;
    let mut searched = 0;
    for &mv in candidates {
        if ctx.control.expired() {
            break;
        }
        let child = board.make_move(mv, color);
        let score = -negamax(&child, !color, depth - 1, -INF, INF, ctx);
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((mv, score));
        }
        searched += 1;
    }

    RootPass {
        best,
        complete: searched == candidates.len() && !ctx.control.expired(),
    }
}

/// Pick the reply once deepening stops: the last completed depth, else the
/// partial first depth, else the first ordered move.
fn settle(
    completed: Option<(Move, i32, u8)>,
    partial: Option<(Move, i32)>,
    picker: &MovePicker,
) -> (Move, i32, u8) {
    match (completed, partial) {
        (Some(done), _) => done,
        (None, Some((mv, score))) => (mv, score, 0),
        (None, None) => (picker.as_slice()[0], picker.scores()[0], 0),
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(MAX_DEPTH)
    }
}

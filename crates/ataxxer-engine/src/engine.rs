//! The engine facade: one entry point over both move selectors.

use std::fmt;
use std::time::Duration;

use ataxxer_core::{Board, Color, Move, is_legal};
use tracing::info;

use crate::config::{EngineConfig, StrategyKind};
use crate::search::beam::BeamSelector;
use crate::search::control::SearchControl;
use crate::search::Searcher;

/// What the engine plays this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Move(Move),
    /// The side to move has no legal move.
    Pass,
}

impl Decision {
    /// Wire coordinates: 1-indexed `(src_row, src_col, dst_row, dst_col)`, all zero for a pass.
    pub const fn to_wire(self) -> (u8, u8, u8, u8) {
        match self {
            Decision::Move(mv) => mv.to_wire(),
            Decision::Pass => (0, 0, 0, 0),
        }
    }

    /// Return `true` for a pass.
    pub const fn is_pass(self) -> bool {
        matches!(self, Decision::Pass)
    }

    /// The move, if any.
    pub const fn as_move(self) -> Option<Move> {
        match self {
            Decision::Move(mv) => Some(mv),
            Decision::Pass => None,
        }
    }
}

impl From<Option<Move>> for Decision {
    fn from(mv: Option<Move>) -> Self {
        mv.map_or(Decision::Pass, Decision::Move)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Move(mv) => write!(f, "{mv}"),
            Decision::Pass => write!(f, "pass"),
        }
    }
}

/// Progress of a selection, reported after each finished iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u8,
    pub score: i32,
    pub nodes: u64,
    pub best_move: Move,
    pub elapsed: Duration,
}

/// Anything that can pick a move for a position.
pub trait MoveSelector {
    /// Choose a move for `color` within `control`'s deadline.
    ///
    /// Returns [`Decision::Pass`] exactly when `color` has no legal move.
    /// `report` is called with progress as the selector goes.
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> Decision;
}

impl MoveSelector for Searcher {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> Decision {
        let result = self.search(board, color, control, |depth, score, nodes, best_move| {
            report(&SearchInfo {
                depth,
                score,
                nodes,
                best_move,
                elapsed: control.elapsed(),
            });
        });
        result.best_move.into()
    }
}

impl MoveSelector for BeamSelector {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> Decision {
        let result = self.select(board, color);
        if let Some(best_move) = result.best_move {
            report(&SearchInfo {
                depth: 1,
                score: result.score,
                nodes: result.scored as u64,
                best_move,
                elapsed: control.elapsed(),
            });
        }
        result.best_move.into()
    }
}

/// The configured move selector.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    AlphaBeta(Searcher),
    Beam(BeamSelector),
}

impl Strategy {
    /// Build the selector named by `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.strategy {
            StrategyKind::AlphaBeta => Strategy::AlphaBeta(Searcher::new(config.max_depth)),
            StrategyKind::Beam => Strategy::Beam(BeamSelector::new(config.beam_width)),
        }
    }

    /// Which kind of selector this is.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::AlphaBeta(_) => StrategyKind::AlphaBeta,
            Strategy::Beam(_) => StrategyKind::Beam,
        }
    }
}

impl MoveSelector for Strategy {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        control: &SearchControl,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> Decision {
        match self {
            Strategy::AlphaBeta(searcher) => searcher.choose_move(board, color, control, report),
            Strategy::Beam(beam) => beam.choose_move(board, color, control, report),
        }
    }
}

/// Engine facade: owns the configuration and the selector built from it.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    strategy: Strategy,
}

impl Engine {
    /// Create an engine for `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            strategy: Strategy::from_config(&config),
            config,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration and rebuild the selector.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.strategy = Strategy::from_config(&config);
        self.config = config;
    }

    /// The active selector.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Choose a move for `color` within `budget`.
    pub fn choose_move(&self, board: &Board, color: Color, budget: Duration) -> Decision {
        self.choose_move_with(board, color, budget, |_| {})
    }

    /// Like [`choose_move`](Self::choose_move), calling `report` with progress.
    pub fn choose_move_with<F>(
        &self,
        board: &Board,
        color: Color,
        budget: Duration,
        mut report: F,
    ) -> Decision
    where
        F: FnMut(&SearchInfo),
    {
        let control = SearchControl::new_timed(budget);
        let decision = self.strategy.choose_move(board, color, &control, &mut report);

        debug_assert!(
            decision.as_move().is_none_or(|mv| is_legal(board, mv, color)),
            "selector returned illegal move {decision} for {color}"
        );

        info!(
            strategy = %self.strategy.kind(),
            %color,
            decision = %decision,
            elapsed_ms = control.elapsed().as_millis() as u64,
            "decision"
        );
        decision
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

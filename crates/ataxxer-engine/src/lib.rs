//! Search and evaluation for ataxxer.

pub mod config;
mod engine;
mod error;
pub mod eval;
pub mod search;
pub mod time;

pub use config::{EngineConfig, StrategyKind};
pub use engine::{Decision, Engine, MoveSelector, SearchInfo, Strategy};
pub use error::ConfigError;
pub use eval::{evaluate, is_terminal, terminal_score};
pub use search::beam::{BeamResult, BeamSelector};
pub use search::control::SearchControl;
pub use search::ordering::MovePicker;
pub use search::{SearchResult, Searcher};
pub use time::budget_for_turn;

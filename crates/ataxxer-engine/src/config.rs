//! Engine configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::search::beam::DEFAULT_BEAM_WIDTH;
use crate::search::negamax::MAX_DEPTH;

/// Largest accepted beam width.
pub const MAX_BEAM_WIDTH: usize = 64;

/// Default wall-clock allowance per decision.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(2900);

/// Which move selector the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Iterative-deepening alpha-beta.
    #[default]
    AlphaBeta,
    /// Single-ply phase-weighted beam.
    Beam,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::AlphaBeta => write!(f, "alphabeta"),
            StrategyKind::Beam => write!(f, "beam"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphabeta" | "alpha-beta" | "ab" => Ok(StrategyKind::AlphaBeta),
            "beam" => Ok(StrategyKind::Beam),
            _ => Err(ConfigError::UnknownStrategy { name: s.to_string() }),
        }
    }
}

/// Tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Move selector to use.
    pub strategy: StrategyKind,
    /// Wall-clock allowance per decision.
    pub time_budget: Duration,
    /// Iterative-deepening cap for alpha-beta.
    pub max_depth: u8,
    /// Candidates kept by the beam selector.
    pub beam_width: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::AlphaBeta,
            time_budget: DEFAULT_TIME_BUDGET,
            max_depth: MAX_DEPTH,
            beam_width: DEFAULT_BEAM_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Set the depth cap, rejecting values outside `1..=MAX_DEPTH`.
    pub fn set_max_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        match u8::try_from(depth) {
            Ok(d) if (1..=MAX_DEPTH).contains(&d) => {
                self.max_depth = d;
                Ok(())
            }
            _ => Err(ConfigError::DepthOutOfRange { depth }),
        }
    }

    /// Set the beam width, rejecting values outside `1..=MAX_BEAM_WIDTH`.
    pub fn set_beam_width(&mut self, width: usize) -> Result<(), ConfigError> {
        if !(1..=MAX_BEAM_WIDTH).contains(&width) {
            return Err(ConfigError::BeamWidthOutOfRange { width });
        }
        self.beam_width = width;
        Ok(())
    }
}

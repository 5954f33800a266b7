//! Engine configuration errors.

/// Error returned when an [`EngineConfig`](crate::EngineConfig) value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The strategy name is not recognized.
    #[error("unknown strategy {name:?}, expected \"alphabeta\" or \"beam\"")]
    UnknownStrategy {
        /// The name as given.
        name: String,
    },

    /// The depth cap is outside `1..=8`.
    #[error("depth {depth} out of range 1..=8")]
    DepthOutOfRange {
        /// The depth as given.
        depth: u32,
    },

    /// The beam width is outside `1..=64`.
    #[error("beam width {width} out of range 1..=64")]
    BeamWidthOutOfRange {
        /// The width as given.
        width: usize,
    },
}

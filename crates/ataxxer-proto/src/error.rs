//! Protocol errors.

use ataxxer_core::SnapshotError;

/// Errors that can occur during protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The `board` command carried an unusable snapshot.
    #[error("malformed board: {source}")]
    MalformedBoard {
        /// Why the snapshot was rejected.
        #[from]
        source: SnapshotError,
    },

    /// The `go` command did not name a side.
    #[error("missing color in go command")]
    MissingColor,

    /// The side given to `go` is not `R` or `B`.
    #[error("invalid color: {value}")]
    InvalidColor {
        /// The token that failed to parse.
        value: String,
    },

    /// The `timeout` value is missing, negative or not a number.
    #[error("invalid timeout: {value}")]
    InvalidTimeout {
        /// The token that failed to parse.
        value: String,
    },

    /// `setoption` is missing its `name` or `value` part.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `setoption` gave a value that does not parse for the option.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The value that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

//! Line-oriented text protocol for ataxxer.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, EngineOption, GoParams, parse_command};
pub use engine::Driver;
pub use error::ProtoError;

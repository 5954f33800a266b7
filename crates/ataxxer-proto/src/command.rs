//! Command parsing.
//!
//! One command per line, tokens separated by whitespace:
//!
//! | Command                               | Meaning                                  |
//! |---------------------------------------|------------------------------------------|
//! | `isready`                             | reply `readyok`                          |
//! | `newgame`                             | reset to the starting position           |
//! | `board <rows>`                        | replace the board with a snapshot        |
//! | `go <R\|B> [timeout <secs>]`          | choose a move for that side              |
//! | `setoption name <n> value <v>`        | change an engine option                  |
//! | `show`                                | print the board                          |
//! | `quit`                                | exit                                     |

use std::time::Duration;

use ataxxer_core::{Board, Color};
use ataxxer_engine::StrategyKind;

use crate::error::ProtoError;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoParams {
    /// Side to move for.
    pub color: Color,
    /// Referee deadline for the reply, if announced.
    pub timeout: Option<Duration>,
}

/// An engine option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// `Strategy`: `alphabeta` or `beam`.
    Strategy(StrategyKind),
    /// `Budget`: per-move allowance in milliseconds.
    Budget(Duration),
    /// `Depth`: alpha-beta depth cap.
    Depth(u32),
    /// `BeamWidth`: candidates kept by the beam selector.
    BeamWidth(usize),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- reset to the starting position.
    NewGame,
    /// `board` -- replace the current board.
    Board(Board),
    /// `go` -- choose and play a move.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(EngineOption),
    /// `show` -- print the board.
    Show,
    /// `quit` -- exit the driver.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtoError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "board" => parse_board(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `board` arguments: eight rows, either as one `/`-separated
/// token or as eight separate tokens.
fn parse_board(tokens: &[&str]) -> Result<Command, ProtoError> {
    let board: Board = tokens.join(" ").parse()?;
    Ok(Command::Board(board))
}

/// Parse the `go` arguments. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtoError> {
    let color_token = tokens.first().ok_or(ProtoError::MissingColor)?;
    let color = parse_color(color_token)?;

    let mut timeout = None;
    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "timeout" => {
                timeout = Some(parse_seconds(tokens.get(i + 1))?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(GoParams { color, timeout }))
}

fn parse_color(token: &str) -> Result<Color, ProtoError> {
    let mut chars = token.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_symbol(c),
        _ => None,
    };
    color.ok_or_else(|| ProtoError::InvalidColor {
        value: token.to_string(),
    })
}

/// Parse a non-negative number of seconds, fractions allowed.
fn parse_seconds(token: Option<&&str>) -> Result<Duration, ProtoError> {
    let value = token.ok_or_else(|| ProtoError::InvalidTimeout {
        value: String::new(),
    })?;
    value
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ProtoError::InvalidTimeout {
            value: value.to_string(),
        })
}

/// Parse `setoption name <name> value <value>`.
///
/// Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtoError> {
    let name_pos = tokens.iter().position(|t| *t == "name");
    let value_pos = tokens.iter().position(|t| *t == "value");
    let (name, value) = match (name_pos, value_pos) {
        (Some(n), Some(v)) if n + 1 < v && v + 1 < tokens.len() => {
            (tokens[n + 1..v].join(" "), tokens[v + 1..].join(" "))
        }
        _ => return Err(ProtoError::MalformedOption),
    };

    let invalid = || ProtoError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "strategy" => EngineOption::Strategy(value.parse().map_err(|_| invalid())?),
        "budget" => {
            let ms: u64 = value.parse().map_err(|_| invalid())?;
            EngineOption::Budget(Duration::from_millis(ms))
        }
        "depth" => EngineOption::Depth(value.parse().map_err(|_| invalid())?),
        "beamwidth" => EngineOption::BeamWidth(value.parse().map_err(|_| invalid())?),
        _ => return Err(ProtoError::UnknownOption { name: name.clone() }),
    };

    Ok(Command::SetOption(option))
}

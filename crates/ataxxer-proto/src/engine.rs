//! The protocol driver: reads commands, runs the engine, writes replies.

use std::io::{self, BufRead, Write};

use ataxxer_core::{Board, Color};
use ataxxer_engine::{Decision, Engine, EngineConfig, SearchInfo, budget_for_turn};
use tracing::{debug, info, warn};

use crate::command::{Command, EngineOption, GoParams, parse_command};
use crate::error::ProtoError;

/// Driver state: the current board and the engine.
pub struct Driver {
    board: Board,
    engine: Engine,
}

impl Driver {
    /// Create a driver on the starting position.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::starting_position(),
            engine: Engine::new(config),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run on stdin and stdout until `quit` or end of input.
    pub fn run_stdio(&mut self) -> Result<(), ProtoError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Lines that fail to parse are logged and skipped. Only I/O errors end
    /// the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ProtoError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => warn!(error = %e, "command parse error"),
            }
            output.flush()?;
        }

        info!("ataxxer shutting down");
        Ok(())
    }

    /// Execute one command, writing any reply to `output`.
    pub fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), ProtoError> {
        match cmd {
            Command::IsReady => writeln!(output, "readyok")?,
            Command::NewGame => self.board = Board::starting_position(),
            Command::Board(board) => self.board = board,
            Command::Go(params) => self.handle_go(params, output)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Show => self.handle_show(output)?,
            Command::Quit => {}
            Command::Unknown(name) => {
                if !name.is_empty() {
                    debug!(cmd = %name, "ignoring unknown command");
                }
            }
        }
        Ok(())
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), ProtoError> {
        let budget = budget_for_turn(self.engine.config().time_budget, params.timeout);
        debug!(color = %params.color, budget_ms = budget.as_millis() as u64, "go");

        let mut write_error = None;
        let decision = self
            .engine
            .choose_move_with(&self.board, params.color, budget, |info: &SearchInfo| {
                if write_error.is_none() {
                    write_error = writeln!(
                        output,
                        "info depth {} score {} nodes {} time {}",
                        info.depth,
                        info.score,
                        info.nodes,
                        info.elapsed.as_millis()
                    )
                    .err();
                }
            });
        if let Some(e) = write_error {
            return Err(e.into());
        }

        let (sx, sy, tx, ty) = decision.to_wire();
        writeln!(output, "move {sx} {sy} {tx} {ty}")?;

        if let Decision::Move(mv) = decision {
            self.board = self.board.make_move(mv, params.color);
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        let mut config = *self.engine.config();
        let applied = match option {
            EngineOption::Strategy(kind) => {
                config.strategy = kind;
                Ok(())
            }
            EngineOption::Budget(budget) => {
                config.time_budget = budget;
                Ok(())
            }
            EngineOption::Depth(depth) => config.set_max_depth(depth),
            EngineOption::BeamWidth(width) => config.set_beam_width(width),
        };

        match applied {
            Ok(()) => {
                info!(?option, "option set");
                self.engine.set_config(config);
            }
            Err(e) => warn!(error = %e, "option rejected"),
        }
    }

    fn handle_show<W: Write>(&self, output: &mut W) -> Result<(), ProtoError> {
        writeln!(output, "{}", self.board.pretty())?;
        writeln!(
            output,
            "red {} blue {}",
            self.board.count(Color::Red),
            self.board.count(Color::Blue)
        )?;
        Ok(())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

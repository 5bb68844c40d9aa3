use std::io::Write;

pub mod expansion;
pub mod pipeline;
pub mod tokens;

mod executor;

use crate::{
    core::{
        commands::{Builtins, Flow},
        env::EnvTable,
        state::{ShellIo, ShellState},
    },
    error::ShellError,
    input::LineSource,
    path::PathResolver,
    process::ProcessExecutor,
};

use expansion::{expand_variables, ExpansionContext};
use pipeline::{validate, ChainRunner};
use tokens::{normalize, tokenize};

/// One interpreter session: state plus the collaborators that act on it.
pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) builtins: Builtins,
    pub(crate) resolver: PathResolver,
    pub(crate) process: ProcessExecutor,
    pid: u32,
}

impl Shell {
    pub fn new(program: &str, env: EnvTable, io: ShellIo) -> Self {
        Self {
            state: ShellState::new(program, env, io),
            builtins: Builtins::new(),
            resolver: PathResolver::new(),
            process: ProcessExecutor::new(),
            pid: std::process::id(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    /// Expands, tokenizes, validates and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        if line.is_empty() {
            self.state.counter += 1;
            return Flow::Status(self.state.last_status);
        }

        let ctx = ExpansionContext {
            pid: self.pid,
            last_status: self.state.last_status,
        };
        let expanded = expand_variables(line, &self.state.env, ctx);
        let tokens = tokenize(&normalize(&expanded), ' ');
        log::debug!("line {:?} -> {:?}", line, tokens);
        if tokens.is_empty() {
            return Flow::Status(self.state.last_status);
        }

        if let Err(e) = validate(&tokens) {
            self.state.last_status = self.state.report(&e);
            return Flow::Status(self.state.last_status);
        }
        self.run_chain(tokens, true)
    }

    /// Reads and runs lines until end of input or `exit`; returns the exit code.
    pub fn run(&mut self, source: &mut dyn LineSource) -> Result<i32, ShellError> {
        loop {
            let Some(line) = source.read_line()? else {
                if source.is_interactive() {
                    writeln!(self.state.io.out)?;
                }
                self.state.io.flush()?;
                return Ok(self.state.last_status);
            };

            let code = match self.execute_line(&line) {
                Flow::Status(_) => None,
                Flow::Terminate => Some(self.state.last_status),
                Flow::Exit(code) => Some(code),
            };
            self.state.io.flush()?;
            if let Some(code) = code {
                log::debug!("leaving with status {}", code);
                return Ok(code);
            }
        }
    }

    /// Runs rc file lines; `Some(code)` when one of them exits the shell.
    pub fn source_rc(&mut self, lines: &[String]) -> Option<i32> {
        for line in lines {
            match self.execute_line(line) {
                Flow::Status(_) => {}
                Flow::Terminate => return Some(self.state.last_status),
                Flow::Exit(code) => return Some(code),
            }
        }
        None
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::core::state::testing::Captured;

    pub fn shell_with_env(env: EnvTable) -> (Shell, Captured, Captured) {
        let out = Captured::default();
        let err = Captured::default();
        let io = ShellIo::new(Box::new(out.clone()), Box::new(err.clone()));
        (Shell::new("husk", env, io), out, err)
    }
}

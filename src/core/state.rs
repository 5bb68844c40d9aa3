use std::io::{self, Write};

use super::aliases::AliasStore;
use super::env::EnvTable;
use crate::diagnostics::Diagnostics;

/// Output streams used by builtins and diagnostics.
pub struct ShellIo {
    pub out: Box<dyn Write>,
    pub err: Box<dyn Write>,
}

impl ShellIo {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { out, err }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Everything one interpreter session mutates while running lines.
pub struct ShellState {
    pub env: EnvTable,
    pub aliases: AliasStore,
    pub last_status: i32,
    pub counter: u64,
    pub diagnostics: Diagnostics,
    pub io: ShellIo,
}

impl ShellState {
    pub fn new(program: &str, env: EnvTable, io: ShellIo) -> Self {
        Self {
            env,
            aliases: AliasStore::new(),
            last_status: 0,
            counter: 1,
            diagnostics: Diagnostics::new(program),
            io,
        }
    }

    /// Emits the diagnostic for `error` and returns its status code.
    pub fn report(&mut self, error: &crate::core::commands::CommandError) -> i32 {
        self.diagnostics.report(&mut self.io.err, self.counter, error)
    }
}

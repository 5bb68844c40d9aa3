use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::process::ProcessError;

/// Failures that stop the interpreter itself rather than a single command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Flag error: {0}")]
    FlagError(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Process error: {0}")]
    ProcessError(#[from] ProcessError),

    #[error("Can't open {}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

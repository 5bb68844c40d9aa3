use std::path::PathBuf;

use thiserror::Error;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Command not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Failed to run {}: {}", .0.display(), .1)]
    Spawn(PathBuf, #[source] std::io::Error),

    #[error("Failed to wait for child: {0}")]
    Wait(#[source] std::io::Error),

    #[error("Signal error: {0}")]
    SignalError(String),
}

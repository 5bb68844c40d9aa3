use std::io::ErrorKind;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::core::env::EnvTable;

/// Status recorded for a child that ended on a signal: `128 + signal`.
pub const SIGNAL_STATUS_BASE: i32 = 128;

/// Runs one external program to completion.
///
/// The child receives exactly the interpreter's environment table and the
/// full argument vector (including the command word as `argv[0]`); the
/// caller blocks until it exits.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn spawn(&self, program: &Path, argv: &[String], env: &EnvTable) -> Result<i32, ProcessError> {
        let mut command = Command::new(program);
        if let Some((arg0, rest)) = argv.split_first() {
            command.arg0(arg0).args(rest);
        }
        command
            .env_clear()
            .envs(env.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessError::NotFound(program.to_path_buf()),
            ErrorKind::PermissionDenied => ProcessError::PermissionDenied(program.to_path_buf()),
            _ if e.raw_os_error() == Some(libc::ENOEXEC) => {
                ProcessError::PermissionDenied(program.to_path_buf())
            }
            _ => ProcessError::Spawn(program.to_path_buf(), e),
        })?;
        log::debug!("spawned {} as pid {}", program.display(), child.id());

        let status = child.wait().map_err(ProcessError::Wait)?;
        let code = exit_code(status);
        log::debug!("pid {} exited with {}", child.id(), code);
        Ok(code)
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => SIGNAL_STATUS_BASE + signal,
        (None, None) => SIGNAL_STATUS_BASE,
    }
}

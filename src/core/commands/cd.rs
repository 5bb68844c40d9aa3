use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;
use std::env;
use std::ffi::CString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    /// Picks the directory to enter, or `None` to stay where we are.
    fn target(args: &[String], state: &ShellState) -> Result<Option<PathBuf>, CommandError> {
        match args.first().map(String::as_str) {
            None => match state.env.get_os("HOME") {
                Some(home) if !home.is_empty() => Ok(Some(PathBuf::from(home))),
                _ => Err(CommandError::CdHomeUnset),
            },
            Some("-") | Some("--") => Ok(state
                .env
                .get_os("OLDPWD")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)),
            Some(option) if option.starts_with('-') => Err(CommandError::cd_illegal_option(option)),
            Some(dir) => {
                let path = PathBuf::from(dir);
                if is_searchable_dir(&path) {
                    Ok(Some(path))
                } else {
                    Err(CommandError::CdFailed(dir.to_string()))
                }
            }
        }
    }
}

/// Directory that the current user may search.
fn is_searchable_dir(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let old_dir = env::current_dir().map_err(|e| CommandError::io("cd", e))?;

        if let Some(target) = Self::target(args, state)? {
            env::set_current_dir(&target)
                .map_err(|_| CommandError::CdFailed(target.to_string_lossy().into_owned()))?;
        }
        let new_dir = env::current_dir().map_err(|e| CommandError::io("cd", e))?;
        log::debug!("cd {} -> {}", old_dir.display(), new_dir.display());

        let environment_error = |_| CommandError::Environment("cd".to_string());
        state
            .env
            .set("OLDPWD", &old_dir)
            .map_err(environment_error)?;
        state
            .env
            .set("PWD", &new_dir)
            .map_err(environment_error)?;

        if args.first().map(String::as_str) == Some("-") {
            writeln!(state.io.out, "{}", new_dir.display())
                .map_err(|e| CommandError::io("cd", e))?;
        }
        Ok(Flow::Status(0))
    }
}

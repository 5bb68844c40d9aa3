use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::env::EnvTable;

/// Finds executables by walking the directories listed in `PATH`.
///
/// Only existence is checked here; whether the file can actually be run is
/// decided when the process is spawned.
#[derive(Clone, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Locates `command` using the table's `PATH` and the current directory.
    pub fn resolve(&self, command: &str, env: &EnvTable) -> Option<PathBuf> {
        let cwd = env::current_dir()
            .ok()
            .or_else(|| env.get_os("PWD").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        self.resolve_in(command, env.get_os("PATH"), &cwd)
    }

    pub fn resolve_in(&self, command: &str, path: Option<&OsStr>, cwd: &Path) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }
        if command.contains('/') {
            let literal = PathBuf::from(command);
            return literal.exists().then_some(literal);
        }

        let found = Self::search_dirs(path?, cwd)
            .into_iter()
            .map(|dir| dir.join(command))
            .find(|candidate| candidate.exists());
        match &found {
            Some(hit) => log::debug!("resolved {} to {}", command, hit.display()),
            None => log::debug!("{} not found on PATH", command),
        }
        found
    }

    /// Directories named by `path` in order; empty entries mean `cwd`.
    pub fn search_dirs(path: &OsStr, cwd: &Path) -> Vec<PathBuf> {
        if path.is_empty() {
            return Vec::new();
        }
        env::split_paths(path)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    cwd.to_path_buf()
                } else {
                    dir
                }
            })
            .collect()
    }
}

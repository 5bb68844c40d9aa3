use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Startup configuration: which rc file to source, if any.
#[derive(Debug, Clone)]
pub struct Config {
    paths: ConfigPaths,
    load_rc: bool,
}

impl Config {
    pub fn new(load_rc: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            paths: ConfigPaths::new()?,
            load_rc,
        })
    }

    pub fn with_paths(paths: ConfigPaths, load_rc: bool) -> Self {
        Self { paths, load_rc }
    }

    /// Command lines from the rc file, in file order.
    pub fn rc_lines(&self) -> Result<Vec<String>, ConfigError> {
        if !self.load_rc {
            return Ok(Vec::new());
        }
        ConfigLoader::new(&self.paths).rc_lines()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to read {}: {}", .0.display(), .1)]
    ReadFailed(PathBuf, #[source] std::io::Error),
}

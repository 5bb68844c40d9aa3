use super::ConfigError;
use std::path::{Path, PathBuf};

pub const RC_FILE_NAME: &str = ".huskrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    rc_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::in_dir(&home))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            rc_path: dir.join(RC_FILE_NAME),
        }
    }

    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_path_in_dir() {
        let paths = ConfigPaths::in_dir(Path::new("/home/testuser"));
        assert_eq!(paths.rc_path(), Path::new("/home/testuser/.huskrc"));
    }
}

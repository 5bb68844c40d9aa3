use std::fs;
use std::io::ErrorKind;

use super::{ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Non-blank, non-comment lines of the rc file; a missing file yields none.
    pub fn rc_lines(&self) -> Result<Vec<String>, ConfigError> {
        let path = self.paths.rc_path();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ConfigError::ReadFailed(path.to_path_buf(), e)),
        };
        log::debug!("sourcing {}", path.display());

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn test_rc_lines_skip_blank_and_comments() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let paths = ConfigPaths::in_dir(dir.path());
        fs::write(
            paths.rc_path(),
            "# aliases\nalias ll='ls -l'\n\n   setenv EDITOR vi  \n",
        )?;

        let lines = ConfigLoader::new(&paths).rc_lines()?;
        assert_eq!(lines, ["alias ll='ls -l'", "setenv EDITOR vi"]);
        Ok(())
    }

    #[test]
    fn test_missing_rc_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let paths = ConfigPaths::in_dir(dir.path());
        assert!(ConfigLoader::new(&paths).rc_lines()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_disabled_rc_is_not_read() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let paths = ConfigPaths::in_dir(dir.path());
        fs::write(paths.rc_path(), "exit 3\n")?;

        assert!(Config::with_paths(paths.clone(), false).rc_lines()?.is_empty());
        assert_eq!(Config::with_paths(paths, true).rc_lines()?, ["exit 3"]);
        Ok(())
    }
}

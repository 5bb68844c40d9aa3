use crate::error::ShellError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    script: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();
        for (name, short, long, description) in [
            ("help", "-h", "--help", "Print this help message"),
            ("version", "-v", "--version", "Show version information"),
            ("debug", "-d", "--debug", "Enable debug logging on stderr"),
            ("norc", "-n", "--norc", "Do not read ~/.huskrc in interactive mode"),
        ] {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    set: false,
                },
            );
        }

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses everything after the program name. The first non-flag argument
    /// names a script; anything after it is ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            if !arg.starts_with('-') {
                self.script = Some(PathBuf::from(arg));
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown option {}", arg)))?;
            flag.set = true;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    pub fn script(&self) -> Option<&Path> {
        self.script.as_deref()
    }

    pub fn help_text(&self) -> String {
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));

        let mut text = String::from("Usage: husk [OPTIONS] [SCRIPT]\n\nOptions:\n");
        for flag in flags {
            text.push_str(&format!("  {}, {:<15} {}\n", flag.short, flag.long, flag.description));
        }
        text
    }
}

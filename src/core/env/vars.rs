use super::EnvError;
use std::borrow::Cow;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

/// Ordered `KEY=VALUE` table owned by the interpreter.
///
/// Seeded from the inherited process environment, mutated only by the
/// `setenv`/`unsetenv`/`cd` builtins and handed verbatim to every child.
/// Entries keep their original bytes; text views are taken on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvTable {
    vars: Vec<(OsString, OsString)>,
}

impl EnvTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_process() -> Self {
        env::vars_os().collect()
    }

    /// The value of `name`, if it is set and valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_os(name).and_then(OsStr::to_str)
    }

    pub fn get_os(&self, name: &str) -> Option<&OsStr> {
        self.position(name).map(|index| self.vars[index].1.as_os_str())
    }

    /// The value of `name` with invalid UTF-8 replaced, for text substitution.
    pub fn get_lossy(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get_os(name).map(OsStr::to_string_lossy)
    }

    /// Replaces the value in place when `name` exists, appends otherwise.
    pub fn set(&mut self, name: &str, value: impl AsRef<OsStr>) -> Result<(), EnvError> {
        if name.is_empty() || name.contains('=') {
            return Err(EnvError::InvalidName(name.to_string()));
        }

        let value = value.as_ref().to_os_string();
        match self.position(name) {
            Some(index) => self.vars[index].1 = value,
            None => self.vars.push((name.into(), value)),
        }
        Ok(())
    }

    /// Returns whether an entry was removed.
    pub fn unset(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.vars.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Writes every entry as a `KEY=VALUE` line, bytes unchanged.
    pub fn write_to(&self, sink: &mut dyn Write) -> io::Result<()> {
        for (key, value) in self.iter() {
            sink.write_all(key.as_bytes())?;
            sink.write_all(b"=")?;
            sink.write_all(value.as_bytes())?;
            sink.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.vars.iter().position(|(key, _)| key == name)
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for EnvTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            let key: OsString = key.into();
            let value: OsString = value.into();
            match table.vars.iter().position(|(k, _)| *k == key) {
                Some(index) => table.vars[index].1 = value,
                None => table.vars.push((key, value)),
            }
        }
        table
    }
}

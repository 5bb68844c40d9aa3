use std::io::BufRead;

use super::LineSource;
use crate::error::ShellError;

/// Reads lines from any buffered reader: redirected stdin or a script file.
pub struct StreamSource<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}

//! Formatting of per-command error messages.
//!
//! Every failure is written to the diagnostic stream as
//! `<program>: <counter>: <detail>`, where the detail comes from the
//! [`CommandError`] variant and the counter is the current command number.

use std::io::Write;

use crate::core::commands::CommandError;

#[derive(Clone, Debug)]
pub struct Diagnostics {
    program: String,
}

impl Diagnostics {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn render(&self, counter: u64, error: &CommandError) -> String {
        format!("{}: {}: {}\n", self.program, counter, error)
    }

    /// Writes the message for `error` and returns the status it maps to.
    pub fn report(&self, sink: &mut dyn Write, counter: u64, error: &CommandError) -> i32 {
        let message = self.render(counter, error);
        if let Err(e) = sink.write_all(message.as_bytes()).and_then(|_| sink.flush()) {
            log::warn!("failed to write diagnostic: {}", e);
        }
        error.status()
    }
}

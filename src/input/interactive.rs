use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{LineSource, PROMPT};
use crate::error::ShellError;

/// Terminal input with line editing; history lives only as long as the session.
pub struct InteractiveSource {
    editor: DefaultEditor,
}

impl InteractiveSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for InteractiveSource {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            log::warn!("couldn't add to history: {}", e);
                        }
                    }
                    return Ok(Some(line));
                }
                // Ctrl-C drops the partial line and prompts again.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

//! Line sources feeding the read-eval loop.

mod interactive;
mod stream;

pub use interactive::InteractiveSource;
pub use stream::StreamSource;

use crate::error::ShellError;

/// Prompt written before each interactive read.
pub const PROMPT: &str = "$ ";

/// Yields one input line at a time, without its trailing newline.
pub trait LineSource {
    /// `Ok(None)` means end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError>;

    /// Whether a person is typing at a terminal.
    fn is_interactive(&self) -> bool {
        false
    }
}

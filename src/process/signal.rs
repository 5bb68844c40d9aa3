use std::io::Write;

use super::ProcessError;

/// Keeps SIGINT from killing an interactive session.
///
/// The foreground child still receives the signal from the terminal; the
/// interpreter only moves to a fresh line and goes on waiting.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    ctrlc::set_handler(|| {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\n");
        let _ = stdout.flush();
    })
    .map_err(|e| ProcessError::SignalError(e.to_string()))
}

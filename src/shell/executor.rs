use std::io;

use crate::core::commands::{CommandError, Flow};
use crate::process::ProcessError;

use super::tokens::unquote;

pub(crate) trait CommandHandler {
    /// Runs one resolved segment and bumps the command counter.
    fn dispatch(&mut self, tokens: &[String]) -> Flow;
}

impl CommandHandler for super::Shell {
    fn dispatch(&mut self, tokens: &[String]) -> Flow {
        let words: Vec<String> = tokens.iter().map(|token| unquote(token)).collect();
        let Some((name, args)) = words.split_first() else {
            return Flow::Status(self.state.last_status);
        };
        log::debug!("dispatch #{}: {:?}", self.state.counter, words);

        let result = match self.builtins.get(name) {
            Some(builtin) => builtin.execute(args, &mut self.state),
            None => self.run_external(name, &words).map(Flow::Status),
        };

        let flow = match result {
            Ok(Flow::Status(status)) => {
                self.state.last_status = status;
                Flow::Status(status)
            }
            Ok(flow) => flow,
            Err(e) => {
                let status = self.state.report(&e);
                self.state.last_status = status;
                Flow::Status(status)
            }
        };

        self.state.counter += 1;
        flow
    }
}

impl super::Shell {
    fn run_external(&mut self, name: &str, argv: &[String]) -> Result<i32, CommandError> {
        let program = self
            .resolver
            .resolve(name, &self.state.env)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        // Builtin output written so far must land before the child's.
        self.state.io.flush().map_err(|e| CommandError::io(name, e))?;

        let status = self
            .process
            .spawn(&program, argv, &self.state.env)
            .map_err(|e| spawn_error(name, e))?;
        log::debug!("{} exited with {}", name, status);
        Ok(status)
    }
}

fn spawn_error(name: &str, error: ProcessError) -> CommandError {
    match error {
        ProcessError::NotFound(_) => CommandError::NotFound(name.to_string()),
        ProcessError::PermissionDenied(_) => CommandError::PermissionDenied(name.to_string()),
        ProcessError::Spawn(_, source) | ProcessError::Wait(source) => CommandError::io(name, source),
        other => CommandError::io(name, io::Error::other(other.to_string())),
    }
}

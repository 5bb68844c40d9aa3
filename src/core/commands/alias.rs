use super::{Command, CommandError, Flow};
use crate::core::aliases::strip_quotes;
use crate::core::state::ShellState;
use std::io::Write;

#[derive(Clone, Default)]
pub struct AliasCommand;

impl AliasCommand {
    fn print(state: &mut ShellState, name: &str, value: &str) -> Result<(), CommandError> {
        writeln!(state.io.out, "{}='{}'", name, value).map_err(|e| CommandError::io("alias", e))
    }
}

impl Command for AliasCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let all: Vec<(String, String)> = state
                .aliases
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            for (name, value) in &all {
                Self::print(state, name, value)?;
            }
            return Ok(Flow::Status(0));
        }

        let mut status = 0;
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) => state.aliases.add(name, &strip_quotes(value)),
                None => match state.aliases.get(arg).map(str::to_string) {
                    Some(value) => Self::print(state, arg, &value)?,
                    None => status = state.report(&CommandError::AliasNotFound(arg.clone())),
                },
            }
        }
        Ok(Flow::Status(status))
    }
}

use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;

/// `env`: print the table as `KEY=VALUE` lines.
#[derive(Clone, Default)]
pub struct EnvCommand;

/// `setenv NAME VALUE`
#[derive(Clone, Default)]
pub struct SetEnvCommand;

/// `unsetenv NAME`
#[derive(Clone, Default)]
pub struct UnsetEnvCommand;

impl Command for EnvCommand {
    fn execute(&self, _args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        state
            .env
            .write_to(&mut state.io.out)
            .map_err(|e| CommandError::io("env", e))?;
        Ok(Flow::Status(0))
    }
}

impl Command for SetEnvCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let (Some(name), Some(value)) = (args.first(), args.get(1)) else {
            return Err(CommandError::Environment("setenv".into()));
        };

        state
            .env
            .set(name, value)
            .map_err(|_| CommandError::Environment("setenv".into()))?;
        log::debug!("setenv {}={}", name, value);
        Ok(Flow::Status(0))
    }
}

impl Command for UnsetEnvCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let Some(name) = args.first() else {
            return Err(CommandError::Environment("unsetenv".into()));
        };

        if state.env.unset(name) {
            log::debug!("unsetenv {}", name);
        }
        Ok(Flow::Status(0))
    }
}

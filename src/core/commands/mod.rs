use std::collections::BTreeMap;

use thiserror::Error;

mod alias;
mod cd;
mod env;
mod exit;
mod help;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetEnvCommand, UnsetEnvCommand};
pub use exit::ExitCommand;
pub use help::HelpCommand;

use super::state::ShellState;

/// Status reported for environment table failures.
pub const ENV_ERROR_STATUS: i32 = -1;

/// One failure kind per diagnostic template.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}: Unable to add/remove from environment")]
    Environment(String),

    #[error("alias: {0} not found")]
    AliasNotFound(String),

    #[error("exit: Illegal number: {0}")]
    IllegalNumber(String),

    #[error("cd: Illegal option {0}")]
    CdIllegalOption(String),

    #[error("cd: can't cd to {0}")]
    CdFailed(String),

    #[error("cd: HOME not set")]
    CdHomeUnset,

    #[error("Syntax error: \"{0}\" unexpected")]
    Syntax(String),

    #[error("{0}: Permission denied")]
    PermissionDenied(String),

    #[error("{0}: not found")]
    NotFound(String),

    #[error("{command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    pub fn status(&self) -> i32 {
        match self {
            CommandError::Environment(_) | CommandError::Io { .. } => ENV_ERROR_STATUS,
            CommandError::AliasNotFound(_) => 1,
            CommandError::IllegalNumber(_)
            | CommandError::CdIllegalOption(_)
            | CommandError::CdFailed(_)
            | CommandError::CdHomeUnset
            | CommandError::Syntax(_) => 2,
            CommandError::PermissionDenied(_) => 126,
            CommandError::NotFound(_) => 127,
        }
    }

    /// Only the dash and the first option letter are cited.
    pub fn cd_illegal_option(operand: &str) -> Self {
        CommandError::CdIllegalOption(operand.chars().take(2).collect())
    }

    pub fn io(command: &str, source: std::io::Error) -> Self {
        CommandError::Io {
            command: command.to_string(),
            source,
        }
    }
}

/// What a builtin asks the interpreter to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going; the value becomes the last exit status.
    Status(i32),
    /// Stop reading input and exit with the last exit status.
    Terminate,
    /// Stop reading input and exit with this code.
    Exit(i32),
}

pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Env(EnvCommand),
    SetEnv(SetEnvCommand),
    UnsetEnv(UnsetEnvCommand),
    Alias(AliasCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Env(cmd) => cmd.execute(args, state),
            CommandType::SetEnv(cmd) => cmd.execute(args, state),
            CommandType::UnsetEnv(cmd) => cmd.execute(args, state),
            CommandType::Alias(cmd) => cmd.execute(args, state),
            CommandType::Help(cmd) => cmd.execute(args, state),
        }
    }
}

/// Name to builtin lookup, matched on the exact command word.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("setenv", CommandType::SetEnv(SetEnvCommand));
        commands.insert("unsetenv", CommandType::UnsetEnv(UnsetEnvCommand));
        commands.insert("alias", CommandType::Alias(AliasCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd as &dyn Command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

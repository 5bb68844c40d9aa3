use super::{Command, CommandError, Flow};
use crate::core::state::ShellState;
use std::io::Write;

const SUMMARY: &str = "\
husk builtin commands
Type 'help' to see this list.
Type 'help name' to find out more about the builtin 'name'.

  alias   \talias [NAME[='VALUE'] ...]
  cd      \tcd [DIRECTORY]
  exit    \texit [STATUS]
  env     \tenv
  setenv  \tsetenv [VARIABLE] [VALUE]
  unsetenv\tunsetenv [VARIABLE]
  help    \thelp [BUILTIN]
";

const ALIAS: &str = "\
alias: alias [NAME[='VALUE'] ...]
\tManage aliases.

\talias: print every alias, one per line, as NAME='VALUE'.
\talias NAME [NAME2 ...]: print the named aliases as NAME='VALUE'.
\talias NAME='VALUE' [...]: define an alias for each NAME. An existing
\tNAME has its value replaced.
";

const CD: &str = "\
cd: cd [DIRECTORY]
\tChange the working directory to DIRECTORY.

\tWithout an argument, change to $HOME. With '-', change to $OLDPWD
\tand print the new directory.

\tPWD and OLDPWD are updated after every successful change.
";

const EXIT: &str = "\
exit: exit [STATUS]
\tLeave the shell.

\tSTATUS is the integer the shell exits with. Without an argument the
\tstatus of the last command is used.
";

const ENV: &str = "\
env: env
\tPrint the current environment.
";

const SETENV: &str = "\
setenv: setenv [VARIABLE] [VALUE]
\tCreate an environment variable, or change the value of an existing one.

\tOn failure, print a message to standard error.
";

const UNSETENV: &str = "\
unsetenv: unsetenv [VARIABLE]
\tRemove an environment variable.

\tOn failure, print a message to standard error.
";

const HELP: &str = "\
help: help [BUILTIN]
\tWithout an argument, list the builtin commands.
\tWith BUILTIN, describe that command.
";

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn topic(name: &str) -> Option<&'static str> {
        match name {
            "alias" => Some(ALIAS),
            "cd" => Some(CD),
            "exit" => Some(EXIT),
            "env" => Some(ENV),
            "setenv" => Some(SETENV),
            "unsetenv" => Some(UNSETENV),
            "help" => Some(HELP),
            _ => None,
        }
    }
}

impl Command for HelpCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let io_error = |e| CommandError::io("help", e);
        match args.first() {
            None => state.io.out.write_all(SUMMARY.as_bytes()).map_err(io_error)?,
            Some(name) => match Self::topic(name) {
                Some(text) => state.io.out.write_all(text.as_bytes()).map_err(io_error)?,
                None => {
                    let program = state.diagnostics.program().to_string();
                    writeln!(state.io.err, "{}: help: no help topics match '{}'", program, name)
                        .map_err(io_error)?
                }
            },
        }
        Ok(Flow::Status(0))
    }
}

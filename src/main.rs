use std::env;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process;

use husk::core::config::Config;
use husk::core::env::EnvTable;
use husk::core::state::ShellIo;
use husk::error::ShellError;
use husk::flags::Flags;
use husk::input::{InteractiveSource, StreamSource};
use husk::process::signal::setup_signal_handlers;
use husk::shell::Shell;

/// Exit status when the script file cannot be opened.
const CANNOT_OPEN_STATUS: i32 = 127;

fn main() {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "husk".to_string());
    let args: Vec<String> = args.collect();

    let code = match run(&program, &args) {
        Ok(code) => code,
        Err(ShellError::CannotOpen { path, .. }) => {
            eprintln!("{}: 0: Can't open {}", program, path.display());
            CANNOT_OPEN_STATUS
        }
        Err(e) => {
            eprintln!("{}: {}", program, e);
            2
        }
    };
    process::exit(code);
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("HUSK_LOG", default)).init();
}

fn run(program: &str, args: &[String]) -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        print!("{}", flags.help_text());
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("husk {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    init_logging(flags.is_set("debug"));

    let mut shell = Shell::new(program, EnvTable::from_process(), ShellIo::stdio());

    if let Some(path) = flags.script() {
        let file = File::open(path).map_err(|source| ShellError::CannotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("running script {}", path.display());
        return shell.run(&mut StreamSource::new(BufReader::new(file)));
    }

    if !io::stdin().is_terminal() {
        return shell.run(&mut StreamSource::new(io::stdin().lock()));
    }

    setup_signal_handlers()?;
    match Config::new(!flags.is_set("norc")).and_then(|config| config.rc_lines()) {
        Ok(lines) => {
            if let Some(code) = shell.source_rc(&lines) {
                return Ok(code);
            }
        }
        Err(e) => log::warn!("skipping rc file: {}", e),
    }

    shell.run(&mut InteractiveSource::new()?)
}

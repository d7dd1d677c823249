use std::path::{Path, PathBuf};
use std::process::{self, ExitStatus};

use docopt::Docopt;
use log::debug;
use nix::unistd::Pid;
use serde_derive::Deserialize;

use rush::{report_error, RushExitStatusExt, Shell, ShellConfig};

const LOG_FILE_NAME: &str = ".rush_log";

const USAGE: &str = "
rush.

Usage:
    rush [options]
    rush [options] -c <command>
    rush [options] <file>
    rush (-h | --help)
    rush --version

Options:
    -h --help       Show this screen.
    --version       Show version.
    -c              If the -c option is present, then commands are read from the first non-option
                        argument command_string.
    --log=<path>    File to write log to, defaults to ~/.rush_log
";

/// Docopts input arguments.
#[derive(Debug, Deserialize)]
struct Args {
    arg_command: Option<String>,
    arg_file: Option<String>,
    flag_version: bool,
    flag_c: bool,
    flag_log: Option<String>,
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    // Running without a log is better than not running at all.
    let _ = init_logger(&args.flag_log);
    debug!("{:?}", args);

    if args.flag_version {
        println!("rush version {}", env!("CARGO_PKG_VERSION"));
    } else if args.flag_c || args.arg_file.is_some() {
        execute_from_command_string_or_file(&args);
    } else {
        execute_from_stdin();
    }
}

fn init_logger(path: &Option<String>) -> Result<(), fern::InitError> {
    let log_path = match path.clone().map(PathBuf::from).or_else(default_log_path) {
        Some(log_path) => log_path,
        None => return Ok(()),
    };

    let pid = Pid::this();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                pid,
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_path)?)
        .apply()?;
    Ok(())
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOG_FILE_NAME))
}

fn create_shell(config: ShellConfig) -> Shell {
    Shell::new(config).unwrap_or_else(|e| {
        log::error!("failed to create shell: {}", e);
        report_error();
        process::exit(ExitStatus::from_failure().code().unwrap_or(1));
    })
}

fn execute_from_command_string_or_file(args: &Args) -> ! {
    let mut shell = create_shell(ShellConfig::noninteractive());

    if let Some(ref command) = args.arg_command {
        shell.execute_command_string(command);
    } else if let Some(ref file_path) = args.arg_file {
        if let Err(e) = shell.execute_commands_from_file(Path::new(file_path)) {
            rush::errors::report(&e);
            shell.exit(Some(ExitStatus::from_failure()));
        }
    }

    shell.exit(None)
}

fn execute_from_stdin() -> ! {
    let mut shell = create_shell(ShellConfig::interactive());
    shell.execute_from_stdin();
    shell.exit(None)
}

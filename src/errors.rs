//! Error module. See the [error-chain](https://crates.io/crates/error-chain) crate for details.
//!
//! The kinds below carry enough detail for the log file. The user never sees
//! them: every failure site calls [`report`], which emits one fixed message.

use std::io::{self, Write};

use error_chain::ChainedError;
use rustyline::error::ReadlineError;

/// The only message the user ever sees for a failure.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

error_chain! {
    foreign_links {
        Io(io::Error);
        Nix(::nix::Error);
        Readline(ReadlineError);
    }

    errors {
        EmptyCommand(position: usize) {
            description("empty command")
            display("syntax error: no command before '&' at token {}", position)
        }
        Redirect(reason: String) {
            description("invalid redirection")
            display("redirection error: {}", reason)
        }
        BuiltinUsage(usage: &'static str) {
            description("wrong number of arguments to builtin")
            display("usage: {}", usage)
        }
        ChangeDirectory(dir: String) {
            description("unable to change directory")
            display("cd: {}: unable to change directory", dir)
        }
        CommandNotFound(command: String) {
            description("command not found")
            display("{}: command not found", command)
        }
        Spawn(command: String) {
            description("failed to start process")
            display("{}: failed to start process", command)
        }
        EndOfInput {
            description("end of input")
            display("end of input reached")
        }
        Wait(pid: u32) {
            description("failed to wait for process")
            display("failed to wait for process {}", pid)
        }
    }
}

/// Writes the uniform error message to standard error.
pub fn report_error() {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = handle.write_all(ERROR_MESSAGE.as_bytes());
    let _ = handle.flush();
}

/// Logs the full error chain, then emits the uniform message.
pub fn report(err: &Error) {
    error!("{}", err.display_chain().to_string().trim_end());
    report_error();
}

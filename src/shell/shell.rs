//! Rush - Shell Module
//!
//! The Shell owns the session state (the search path) and runs each line:
//! every job is dispatched in order, then every started process is waited on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{self, ExitStatus};

use crate::editor::Editor;
use crate::errors::{self, ErrorKind, Result, ResultExt};
use crate::parser::{resolve_redirect, Job, Line};
use crate::shell::{
    execute_command::{dispatch, Dispatch},
    process::Process,
    ShellConfig,
};
use crate::util::{self, RushExitStatusExt};

/// Rush Shell
#[derive(Debug)]
pub struct Shell {
    /// Colon-separated directories searched for bare program names.
    search_path: Option<String>,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Shell> {
        let shell = Shell {
            search_path: config.initial_search_path.clone(),
            config,
        };
        info!("rush started up with search path {:?}", shell.search_path);
        Ok(shell)
    }

    pub fn search_path(&self) -> Option<&str> {
        self.search_path.as_deref()
    }

    pub(crate) fn set_search_path(&mut self, search_path: Option<String>) {
        self.search_path = search_path;
    }

    /// Parses and runs one line, returning the processes it started once
    /// they have all terminated.
    ///
    /// Failures are reported and never escape: a rejected line runs nothing,
    /// and a job that fails does not stop the jobs after it.
    pub fn execute_command_string(&mut self, input: &str) -> Vec<Process> {
        let line = match Line::parse(input) {
            Ok(Some(line)) => line,
            Ok(None) => return Vec::new(),
            Err(e) => {
                errors::report(&e);
                return Vec::new();
            }
        };

        debug!("running line: {}", line.input);
        self.run_jobs(line.jobs)
    }

    /// Runs each line of the file at `path` in order.
    pub fn execute_commands_from_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .chain_err(|| ErrorKind::Msg(format!("unable to open {}", path.display())))?;
        for line in BufReader::new(file).lines() {
            self.execute_command_string(&line?);
        }

        Ok(())
    }

    /// Reads and runs lines until end of input or a read failure. Either
    /// one is reported before returning.
    pub fn execute_from_stdin(&mut self) {
        let interactive = self.config.is_interactive() && util::isatty();
        let mut editor = match Editor::new(interactive) {
            Ok(editor) => editor,
            Err(e) => {
                errors::report(&e);
                return;
            }
        };

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(Some(line)) => {
                    self.execute_command_string(&line);
                }
                Ok(None) => {
                    errors::report(&ErrorKind::EndOfInput.into());
                    break;
                }
                Err(e) => {
                    errors::report(&e);
                    break;
                }
            }
        }
    }

    /// Terminates the shell. `None` means success.
    pub fn exit(&mut self, n: Option<ExitStatus>) -> ! {
        let code = n
            .unwrap_or_else(ExitStatus::from_success)
            .code()
            .unwrap_or(1);
        info!("rush has shut down with status {}", code);
        process::exit(code);
    }

    /// Dispatches every job in order, then waits for all started processes.
    fn run_jobs(&mut self, jobs: Vec<Job>) -> Vec<Process> {
        let mut processes = Vec::new();
        for mut job in jobs {
            if let Err(e) = resolve_redirect(&mut job) {
                errors::report(&e);
                continue;
            }

            match dispatch(self, &job) {
                Dispatch::Spawned(process) => processes.push(process),
                Dispatch::Builtin | Dispatch::Failed => {}
            }
        }

        wait_all(&mut processes);
        processes
    }
}

/// Waits for each process in turn. A failed wait is reported and the
/// remaining processes are still waited on.
pub(crate) fn wait_all(processes: &mut [Process]) {
    for process in processes.iter_mut() {
        match process.wait() {
            Ok(status) => debug!("{} exited with {}", process, status),
            Err(e) => errors::report(&e),
        }
    }
}

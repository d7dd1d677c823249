use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::{self, ErrorKind, Result, ResultExt};
use crate::parser::Job;
use crate::shell::{builtins, process::Process, search_path, Shell};

/// Permissions for files created by output redirection.
const REDIRECT_FILE_MODE: u32 = 0o644;

/// What became of a dispatched job.
#[derive(Debug)]
pub enum Dispatch {
    /// Ran to completion inside the shell.
    Builtin,
    /// Running as a child process.
    Spawned(Process),
    /// Never started; the failure has been reported.
    Failed,
}

/// Runs a builtin in place or starts an external job, without waiting for it.
pub fn dispatch(shell: &mut Shell, job: &Job) -> Dispatch {
    if builtins::is_builtin(job.program()) {
        if let Some(target) = job.redirect() {
            debug!(
                "{}: redirect to {} has no effect on builtins",
                job.program(),
                target.display()
            );
        }

        if let Err(e) = builtins::run(shell, job.program(), job.args()) {
            errors::report(&e);
        }
        return Dispatch::Builtin;
    }

    match spawn_job(job, shell.search_path()) {
        Ok(process) => Dispatch::Spawned(process),
        Err(e) => {
            errors::report(&e);
            Dispatch::Failed
        }
    }
}

/// Starts `job` as a child process.
///
/// The redirect target is opened first, then the program is located, then
/// the child is created; a failure at any step means no child exists. The
/// child sees `search_path` as its `PATH` and the typed name as `argv[0]`.
pub fn spawn_job(job: &Job, search_path: Option<&str>) -> Result<Process> {
    let stdout = match job.redirect() {
        Some(target) => Stdio::from(open_redirect(target)?),
        None => Stdio::inherit(),
    };
    let program = search_path::locate_program(job.program(), search_path)?;

    let mut command = Command::new(&program);
    command.arg0(job.program()).args(job.args()).stdout(stdout);
    if let Some(search_path) = search_path {
        command.env("PATH", search_path);
    } else {
        command.env_remove("PATH");
    }

    let child = command
        .spawn()
        .chain_err(|| ErrorKind::Spawn(program.display().to_string()))?;
    info!("started {} ({}) as pid {}", job.program(), program.display(), child.id());
    Ok(Process::new(job.argv(), child.id()))
}

fn open_redirect(target: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(REDIRECT_FILE_MODE)
        .open(target)
        .chain_err(|| ErrorKind::Redirect(format!("unable to open {}", target.display())))
}

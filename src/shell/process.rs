use std::fmt;
use std::process::ExitStatus;

use nix::sys::wait::{self, WaitStatus};
use nix::unistd::Pid;

use crate::errors::{ErrorKind, Result, ResultExt};
use crate::util::RushExitStatusExt;

/// A spawned external job, as seen from the shell.
#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    argv: Vec<String>,
    id: u32,
    status: ProcessStatus,
    status_code: Option<ExitStatus>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProcessStatus {
    Running,
    Completed,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ProcessStatus::Running => write!(f, "Running"),
            ProcessStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl Process {
    pub fn new<S: AsRef<str>>(argv: &[S], id: u32) -> Process {
        Process {
            argv: argv.iter().map(|arg| arg.as_ref().to_string()).collect(),
            id,
            status: ProcessStatus::Running,
            status_code: None,
        }
    }

    pub fn argv(&self) -> String {
        self.argv[..].join(" ")
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn status_code(&self) -> Option<ExitStatus> {
        self.status_code
    }

    /// Blocks until the process terminates. Waiting again returns the
    /// recorded status.
    pub fn wait(&mut self) -> Result<ExitStatus> {
        if let (ProcessStatus::Completed, Some(status_code)) = (self.status, self.status_code) {
            return Ok(status_code);
        }

        let status_code = wait_for_process(self.id)?;
        self.status = ProcessStatus::Completed;
        self.status_code = Some(status_code);
        Ok(status_code)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}\t{}", self.id, self.status, self.argv())
    }
}

fn wait_for_process(id: u32) -> Result<ExitStatus> {
    let pid = Pid::from_raw(id as i32);
    loop {
        let wait_status = wait::waitpid(pid, None).chain_err(|| ErrorKind::Wait(id))?;
        match wait_status {
            WaitStatus::Exited(_, status) => return Ok(ExitStatus::from_status(status)),
            WaitStatus::Signaled(_, signal, _) => {
                return Ok(ExitStatus::from_status(128 + signal as i32))
            }
            other => debug!("ignoring wait status {:?} for {}", other, id),
        }
    }
}

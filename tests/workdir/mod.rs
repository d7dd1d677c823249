use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{self, Command, Stdio};

use tempdir::TempDir;

/// WorkDir represents a scratch directory in which the shell is run.
#[derive(Debug)]
pub struct WorkDir {
    dir: TempDir,
}

impl WorkDir {
    pub fn new(name: &str) -> WorkDir {
        WorkDir {
            dir: TempDir::new(name).expect("unable to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Builds a new command to run the shell in this working directory.
    pub fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.path());
        cmd.arg(format!("--log={}", self.path().join("rush.log").display()));
        cmd.args(args);
        cmd
    }

    /// Feeds `input` to the shell on standard input and collects its output.
    pub fn run_stdin(&self, input: &str) -> process::Output {
        let mut child = self
            .command(Vec::<&str>::new())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start rush");
        child
            .stdin
            .take()
            .expect("stdin was piped")
            .write_all(input.as_bytes())
            .expect("failed to write to rush");
        child.wait_with_output().expect("failed to wait for rush")
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|e| panic!("unable to read {}: {}", name, e))
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("unable to write file");
        path
    }
}

/// Returns path to executable.
fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rush"))
}

pub fn stdout(output: &process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

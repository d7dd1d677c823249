use std::mem;
use std::path::{Path, PathBuf};

use crate::errors::{ErrorKind, Result};

/// Separates jobs that run concurrently on one line.
pub const BACKGROUND_MARKER: &str = "&";

/// One program invocation: a non-empty argument vector plus an optional
/// file that replaces its standard output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub(crate) argv: Vec<String>,
    pub(crate) redirect: Option<PathBuf>,
}

impl Job {
    /// # Panics
    /// Panics if `argv` is empty.
    pub fn new<S: AsRef<str>>(argv: &[S]) -> Job {
        assert!(!argv.is_empty(), "a job needs a program name");
        Job {
            argv: argv.iter().map(|arg| arg.as_ref().to_string()).collect(),
            redirect: None,
        }
    }

    fn from_owned(argv: Vec<String>) -> Job {
        debug_assert!(!argv.is_empty());
        Job {
            argv,
            redirect: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn redirect(&self) -> Option<&Path> {
        self.redirect.as_ref().map(PathBuf::as_path)
    }
}

/// Groups `tokens` into jobs, cutting at every background marker.
///
/// A marker with no command before it rejects the whole line, except for a
/// line made of a single marker, which is an empty no-op. A trailing marker
/// does not start another job.
pub fn segment<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Job>> {
    if tokens.len() == 1 && tokens[0].as_ref() == BACKGROUND_MARKER {
        return Ok(Vec::new());
    }

    let mut jobs = Vec::new();
    let mut current = Vec::new();
    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if token != BACKGROUND_MARKER {
            current.push(token.to_string());
            continue;
        }

        if current.is_empty() {
            return Err(ErrorKind::EmptyCommand(position).into());
        }
        jobs.push(Job::from_owned(mem::replace(&mut current, Vec::new())));
    }

    if !current.is_empty() {
        jobs.push(Job::from_owned(current));
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_job() {
        let jobs = segment(&["ls", "-l"]).unwrap();
        assert_eq!(jobs, vec![Job::new(&["ls", "-l"])]);
    }

    #[test]
    fn test_trailing_marker() {
        let jobs = segment(&["a", "&", "b", "&"]).unwrap();
        assert_eq!(jobs, vec![Job::new(&["a"]), Job::new(&["b"])]);
    }

    #[test]
    fn test_marker_between_jobs() {
        let jobs = segment(&["sleep", "1", "&", "echo", "hi"]).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].program(), "sleep");
        assert_eq!(jobs[0].args(), &["1".to_string()]);
        assert_eq!(jobs[1].argv(), &["echo".to_string(), "hi".to_string()]);
    }

    #[test]
    fn test_lone_marker_is_noop() {
        assert!(segment(&["&"]).unwrap().is_empty());
    }

    #[test]
    fn test_no_tokens() {
        let tokens: [&str; 0] = [];
        assert!(segment(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_marker_rejects_line() {
        match segment(&["a", "&", "&"]) {
            Err(e) => match *e.kind() {
                ErrorKind::EmptyCommand(position) => assert_eq!(position, 2),
                ref kind => panic!("unexpected error kind: {}", kind),
            },
            Ok(jobs) => panic!("expected an error, got {:?}", jobs),
        }
    }

    #[test]
    fn test_leading_marker_rejects_line() {
        assert!(segment(&["&", "ls"]).is_err());
        assert!(segment(&["&", "&"]).is_err());
    }

    #[test]
    fn test_jobs_never_contain_marker() {
        let jobs = segment(&["a", "b", "&", "c", "&", "d", "e"]).unwrap();
        assert!(jobs
            .iter()
            .all(|job| job.argv().iter().all(|arg| arg != BACKGROUND_MARKER)));
        assert_eq!(jobs.len(), 3);
    }

    #[test]
    #[should_panic]
    fn test_empty_job_panics() {
        let argv: [&str; 0] = [];
        Job::new(&argv);
    }
}

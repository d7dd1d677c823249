//! Rush Parser
//!
//! Turns one input line into the jobs it names. Parsing never touches the
//! file system or the session; redirections are resolved per job later.

pub use self::job::{segment, Job, BACKGROUND_MARKER};
pub use self::redirect::{resolve_redirect, REDIRECT_OPERATOR};
pub use self::tokenizer::tokenize;

mod job;
mod redirect;
mod tokenizer;

use crate::errors::Result;

#[derive(Debug, PartialEq)]
pub struct Line {
    /// Command line, used for messages
    pub input: String,
    /// The jobs to dispatch, in order
    pub jobs: Vec<Job>,
}

impl Line {
    /// Parse `input` into jobs.
    ///
    /// Returns `None` when the line names no job at all.
    pub fn parse(input: &str) -> Result<Option<Line>> {
        let tokens = tokenize(input);
        let jobs = segment(&tokens)?;
        debug!("parsed {} job(s) from {:?}", jobs.len(), input);
        if jobs.is_empty() {
            return Ok(None);
        }

        Ok(Some(Line {
            input: input.trim().to_string(),
            jobs,
        }))
    }
}

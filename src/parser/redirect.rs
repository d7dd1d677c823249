//! Output redirection.
//!
//! A job may end with `> target`. The operator must be the second-to-last
//! argument and must follow at least the program name.

use std::path::PathBuf;

use super::job::Job;
use crate::errors::{ErrorKind, Result};

pub const REDIRECT_OPERATOR: &str = ">";

/// Moves a trailing `> target` out of the job's arguments into its redirect.
///
/// A job without the operator is left untouched.
pub fn resolve_redirect(job: &mut Job) -> Result<()> {
    let mut positions = job
        .argv
        .iter()
        .enumerate()
        .filter(|&(_, arg)| arg == REDIRECT_OPERATOR)
        .map(|(position, _)| position);

    let position = match positions.next() {
        Some(position) => position,
        None => return Ok(()),
    };
    if positions.next().is_some() {
        bail!(ErrorKind::Redirect(format!(
            "more than one '{}' in '{}'",
            REDIRECT_OPERATOR,
            job.argv.join(" ")
        )));
    }
    if position == 0 || position + 2 != job.argv.len() {
        bail!(ErrorKind::Redirect(format!(
            "'{}' must be followed by exactly one file in '{}'",
            REDIRECT_OPERATOR,
            job.argv.join(" ")
        )));
    }

    let mut tail = job.argv.split_off(position);
    job.redirect = Some(PathBuf::from(tail.swap_remove(1)));
    Ok(())
}

//! Rush - a line-oriented command interpreter
//!
//! Each input line is split into jobs on `&`. Builtins (`cd`, `exit`,
//! `path`) run inside the shell in line order; everything else is started as
//! a child process, and the shell waits for all of a line's children before
//! reading the next line.

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

#[macro_use]
mod util;
mod editor;
pub mod errors;
pub mod parser;
pub mod shell;

pub use crate::errors::report_error;
pub use crate::shell::{Shell, ShellConfig};
pub use crate::util::RushExitStatusExt;

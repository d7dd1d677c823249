//! Rush builtins
//!
//! Commands that run inside the shell process because they change the
//! shell's own state. Each builtin checks its argument count; builtins never
//! redirect their output.

use self::prelude::*;

use self::dirs::Cd;
use self::exit::Exit;
use self::path::SearchPath;

pub mod prelude {
    pub use crate::errors::{ErrorKind, Result, ResultExt};
    pub use crate::shell::Shell;
}

mod dirs;
mod exit;
mod path;

const CD_NAME: &str = "cd";
const EXIT_NAME: &str = "exit";
const PATH_NAME: &str = "path";

/// Represents a Rush builtin command such as cd or path.
pub trait BuiltinCommand {
    /// The NAME of the command.
    const NAME: &'static str;
    /// The usage string, logged when the arguments don't fit.
    const USAGE: &'static str;
    /// Runs the command with the given arguments in the `shell` environment.
    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T]) -> Result<()>;
}

pub fn is_builtin<T: AsRef<str>>(program: T) -> bool {
    [CD_NAME, EXIT_NAME, PATH_NAME].contains(&program.as_ref())
}

/// precondition: command is a builtin.
pub fn run<S1, S2>(shell: &mut Shell, program: S1, args: &[S2]) -> Result<()>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    debug_assert!(is_builtin(&program));
    debug!("running builtin {}", program.as_ref());

    match program.as_ref() {
        CD_NAME => Cd::run(shell, args),
        EXIT_NAME => Exit::run(shell, args),
        PATH_NAME => SearchPath::run(shell, args),
        _ => unreachable!(),
    }
}

/// Fails with the builtin's usage unless exactly `expected` arguments were given.
fn check_arg_count<B: BuiltinCommand, T>(args: &[T], expected: usize) -> Result<()> {
    if args.len() != expected {
        bail!(ErrorKind::BuiltinUsage(B::USAGE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("cd"));
        assert!(is_builtin("exit"));
        assert!(is_builtin("path"));
        assert!(!is_builtin("ls"));
        assert!(!is_builtin("PATH"));
        assert!(!is_builtin("/bin/cd"));
    }
}

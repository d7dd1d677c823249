use super::{check_arg_count, BuiltinCommand, EXIT_NAME};
use crate::shell::builtins::prelude::*;

pub struct Exit;

impl BuiltinCommand for Exit {
    const NAME: &'static str = EXIT_NAME;

    const USAGE: &'static str = "exit";

    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T]) -> Result<()> {
        check_arg_count::<Self, T>(args, 0)?;
        shell.exit(None);
    }
}

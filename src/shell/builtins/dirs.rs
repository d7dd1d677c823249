use std::env;

use super::{check_arg_count, BuiltinCommand, CD_NAME};
use crate::shell::builtins::prelude::*;

pub struct Cd;

impl BuiltinCommand for Cd {
    const NAME: &'static str = CD_NAME;

    const USAGE: &'static str = "cd dir";

    fn run<T: AsRef<str>>(_shell: &mut Shell, args: &[T]) -> Result<()> {
        check_arg_count::<Self, T>(args, 1)?;
        let dir = args[0].as_ref();
        env::set_current_dir(dir).chain_err(|| ErrorKind::ChangeDirectory(dir.to_string()))?;
        debug!("{}: changed directory to {}", Self::NAME, dir);
        Ok(())
    }
}

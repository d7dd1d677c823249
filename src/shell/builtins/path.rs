use super::{BuiltinCommand, PATH_NAME};
use crate::shell::builtins::prelude::*;
use crate::shell::search_path::SEARCH_PATH_SEPARATOR;

/// Replaces the whole search path, one directory per argument.
pub struct SearchPath;

impl BuiltinCommand for SearchPath {
    const NAME: &'static str = PATH_NAME;

    const USAGE: &'static str = "path [dir ...]";

    fn run<T: AsRef<str>>(shell: &mut Shell, args: &[T]) -> Result<()> {
        let search_path = args
            .iter()
            .map(|arg| arg.as_ref())
            .collect::<Vec<&str>>()
            .join(SEARCH_PATH_SEPARATOR);
        debug!("{}: search path is now {:?}", Self::NAME, search_path);
        shell.set_search_path(Some(search_path));
        Ok(())
    }
}

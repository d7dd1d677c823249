//! Resolves bare program names against the session's search path.

use std::path::{Path, PathBuf};

use nix::unistd::{self, AccessFlags};

use crate::errors::{Error, ErrorKind, Result};

/// Separates directories in the search path.
pub const SEARCH_PATH_SEPARATOR: &str = ":";

/// Search path a new session starts with.
pub const DEFAULT_SEARCH_PATH: &str = "/bin";

/// Does `program` name a file directly rather than something to search for?
pub fn has_path_separator(program: &str) -> bool {
    program.contains('/')
}

/// Finds the program a job should run.
///
/// Names containing `/` are used as given. Anything else is looked up in the
/// non-empty directories of `search_path`, left to right; the first
/// executable candidate wins. An unset search path finds nothing.
pub fn locate_program(program: &str, search_path: Option<&str>) -> Result<PathBuf> {
    if has_path_separator(program) {
        return Ok(PathBuf::from(program));
    }

    let not_found = || Error::from(ErrorKind::CommandNotFound(program.to_string()));
    let search_path = search_path.ok_or_else(not_found)?;
    let found = search_path
        .split(SEARCH_PATH_SEPARATOR)
        .filter(|dir| !dir.is_empty())
        .map(|dir| PathBuf::from(format!("{}/{}", dir, program)))
        .find(|candidate| is_executable(candidate))
        .ok_or_else(not_found)?;
    debug!("resolved {} to {}", program, found.display());
    Ok(found)
}

fn is_executable(path: &Path) -> bool {
    unistd::access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::os::unix::fs::PermissionsExt;

    use tempdir::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn joined(dirs: &[&Path]) -> String {
        dirs.iter()
            .map(|d| d.to_str().unwrap().to_string())
            .collect::<Vec<_>>()
            .join(":")
    }

    #[test]
    fn test_first_match_wins() {
        let first = TempDir::new("rush-first").unwrap();
        let second = TempDir::new("rush-second").unwrap();
        touch(second.path(), "tool", 0o755);
        let expected = touch(first.path(), "tool", 0o755);

        let search_path = joined(&[first.path(), second.path()]);
        let found = locate_program("tool", Some(&search_path)).unwrap();
        assert_eq!(found, PathBuf::from(format!("{}/tool", first.path().display())));
        assert_eq!(fs::canonicalize(found).unwrap(), fs::canonicalize(expected).unwrap());
    }

    #[test]
    fn test_skips_non_executables() {
        let first = TempDir::new("rush-plain").unwrap();
        let second = TempDir::new("rush-exec").unwrap();
        touch(first.path(), "tool", 0o644);
        touch(second.path(), "tool", 0o700);

        let search_path = joined(&[first.path(), second.path()]);
        let found = locate_program("tool", Some(&search_path)).unwrap();
        assert!(found.starts_with(second.path()));
    }

    #[test]
    fn test_skips_empty_segments() {
        let dir = TempDir::new("rush-empty-segments").unwrap();
        touch(dir.path(), "tool", 0o755);

        let search_path = format!("::{}:", dir.path().display());
        assert!(locate_program("tool", Some(&search_path)).is_ok());
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new("rush-missing").unwrap();
        let search_path = joined(&[dir.path()]);
        match locate_program("tool", Some(&search_path)) {
            Err(e) => match *e.kind() {
                ErrorKind::CommandNotFound(ref name) => assert_eq!(name, "tool"),
                ref kind => panic!("unexpected error kind: {}", kind),
            },
            Ok(path) => panic!("unexpectedly found {}", path.display()),
        }
    }

    #[test]
    fn test_unset_and_empty_search_paths() {
        assert!(locate_program("sh", None).is_err());
        assert!(locate_program("sh", Some("")).is_err());
        assert!(locate_program("sh", Some(":::")).is_err());
    }

    #[test]
    fn test_explicit_paths_bypass_search() {
        assert_eq!(
            locate_program("./script", None).unwrap(),
            PathBuf::from("./script")
        );
        assert_eq!(
            locate_program("/no/such/program", Some("")).unwrap(),
            PathBuf::from("/no/such/program")
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let dir = TempDir::new("rush-repeat").unwrap();
        touch(dir.path(), "tool", 0o755);

        let search_path = joined(&[dir.path()]);
        let first = locate_program("tool", Some(&search_path)).unwrap();
        let second = locate_program("tool", Some(&search_path)).unwrap();
        assert_eq!(first, second);
    }
}

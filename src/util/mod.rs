use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Logs the error of a `Result` without propagating it.
macro_rules! log_if_err {
    ($result:expr, $fmt:literal) => {{
        if let Err(ref e) = $result {
            error!(concat!($fmt, ": {}"), e);
        }
    }};
    ($result:expr, $fmt:literal, $($arg:tt)*) => {{
        if let Err(ref e) = $result {
            error!(concat!($fmt, ": {}"), $($arg)*, e);
        }
    }};
}

pub use self::unix::isatty;

pub mod unix;

/// Rush Utility Extensions for `ExitStatus`
pub trait RushExitStatusExt {
    /// Create an ExitStatus to indicate *successful* program execution.
    fn from_success() -> Self;

    /// Create an ExitStatus to indicate *unsuccessful* program execution.
    fn from_failure() -> Self;

    /// Create an ExitStatus from a status code
    fn from_status(code: i32) -> Self;
}

impl RushExitStatusExt for ExitStatus {
    /// # Examples
    /// ```rust
    /// use rush::RushExitStatusExt;
    /// use std::process::ExitStatus;
    /// assert!(ExitStatus::from_success().success());
    /// ```
    fn from_success() -> Self {
        ExitStatus::from_status(0)
    }

    /// # Examples
    /// ```rust
    /// use rush::RushExitStatusExt;
    /// use std::process::ExitStatus;
    /// assert!(!ExitStatus::from_failure().success());
    /// ```
    fn from_failure() -> Self {
        ExitStatus::from_status(1)
    }

    /// # Examples
    /// ```rust
    /// use rush::RushExitStatusExt;
    /// use std::process::ExitStatus;
    /// assert!(ExitStatus::from_status(0).success());
    /// assert!(!ExitStatus::from_status(1).success());
    /// ```
    fn from_status(code: i32) -> Self {
        ExitStatus::from_raw(code << 8)
    }
}

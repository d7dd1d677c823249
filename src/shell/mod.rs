pub use self::execute_command::{dispatch, spawn_job, Dispatch};
pub use self::process::{Process, ProcessStatus};
pub use self::search_path::{locate_program, DEFAULT_SEARCH_PATH};
pub use self::shell::Shell;

mod builtins;
mod execute_command;
mod process;
mod search_path;
#[allow(clippy::module_inception)]
mod shell;

/// Prompt shown before each line when reading from a terminal.
pub const DEFAULT_PROMPT: &str = "rush> ";

/// Policy object to control a Shell's behavior
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Search path the session starts with; `None` starts with it unset.
    initial_search_path: Option<String>,

    /// Text shown before reading each line.
    prompt: String,

    /// Determines if the prompt is displayed and lines are kept in the
    /// editor's history.
    interactive: bool,
}

impl ShellConfig {
    /// Creates an interactive shell
    ///
    /// # Complete List
    /// - The prompt is displayed
    /// - Lines are added to the in-memory history
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Creates a noninteractive shell, e.g. for `-c` strings and batch files
    pub fn noninteractive() -> Self {
        Default::default()
    }

    pub fn with_search_path(mut self, search_path: Option<&str>) -> Self {
        self.initial_search_path = search_path.map(str::to_string);
        self
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_search_path: Some(DEFAULT_SEARCH_PATH.to_string()),
            prompt: DEFAULT_PROMPT.to_string(),
            interactive: false,
        }
    }
}

//! Line input.
//!
//! On a terminal lines come from rustyline, with filename completion and an
//! in-memory history. Otherwise standard input is read one line at a time.

use std::io::{self, BufRead};

use rustyline::{
    self,
    completion::{Completer, FilenameCompleter, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    CompletionType, Config, Helper,
};

use crate::errors::Result;

pub struct EditorHelper(FilenameCompleter);

impl Completer for EditorHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.0.complete(line, pos, ctx)
    }
}

impl Hinter for EditorHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Highlighter for EditorHelper {}

impl Helper for EditorHelper {}

impl Validator for EditorHelper {}

pub enum Editor {
    Terminal(rustyline::Editor<EditorHelper, DefaultHistory>),
    Stream,
}

impl Editor {
    pub fn new(interactive: bool) -> Result<Editor> {
        if !interactive {
            return Ok(Editor::Stream);
        }

        let config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::Circular)
            .build();
        let mut internal = rustyline::Editor::with_config(config)?;
        internal.set_helper(Some(EditorHelper(FilenameCompleter::new())));
        Ok(Editor::Terminal(internal))
    }

    /// Reads the next line, without its line ending. The prompt is only
    /// shown on a terminal.
    /// Returns `None` when end of file is reached.
    pub fn readline(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            Editor::Terminal(internal) => match internal.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let temp_result = internal.add_history_entry(line.as_str());
                        log_if_err!(temp_result, "add_history_entry");
                    }
                    Ok(Some(line))
                }
                // ^C abandons the current line
                Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
                Err(ReadlineError::Eof) => Ok(None),
                Err(e) => Err(e.into()),
            },
            Editor::Stream => read_stream_line(&mut io::stdin().lock()),
        }
    }
}

/// Reads one line from `input`; an empty read is end of file.
fn read_stream_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

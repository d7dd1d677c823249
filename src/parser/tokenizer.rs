//! Splits a raw input line into whitespace-delimited tokens.

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
const WHITESPACE: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

fn is_delimiter(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Breaks `line` into tokens borrowed from it.
///
/// Runs of delimiters collapse into one, so leading, trailing and repeated
/// whitespace never produce empty tokens. A blank line yields no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}

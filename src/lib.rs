#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod table;

/// A location in source text. `line` and `column` are 1-based; `index`
/// counts characters from the start of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    /// 1-based: `index - line_start + 1`, so the first character of a line
    /// is column 1.
    pub column: usize,
}

impl Position {
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Position { index, line, column }
    }

    pub fn start() -> Self {
        Position::new(0, 1, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Converts `\r\n` line endings to `\n` before scanning, so sources
/// saved with Windows line endings scan the same as Unix ones.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

/// Installs the stderr log backend. The level comes from `RUST_LOG` and
/// defaults to `warn`, so table diagnostics are always shown.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init()
}

/// Returns the text of the 1-based `line` without its terminator.
pub fn get_line_at_position(content: &str, line: usize) -> Option<&str> {
    content
        .split('\n')
        .nth(line.checked_sub(1)?)
        .map(|text| text.trim_end_matches('\r'))
}


pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        error: message
        -> main.src
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    print!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

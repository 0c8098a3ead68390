use crate::{
    errors::errors::{Error, ErrorImpl},
    table::table::{StateId, TransitionTable},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Scan position. `line_start` is the index of the first character of the
/// current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    index: usize,
    line: usize,
    line_start: usize,
}

impl Cursor {
    fn new() -> Cursor {
        Cursor {
            index: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn advance(&mut self, c: char) {
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.index;
        }
    }

    fn position(&self) -> Position {
        Position::new(self.index, self.line, self.index - self.line_start + 1)
    }
}

/// Last accepting state seen during a walk, with everything needed to
/// resume from it.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    state: StateId,
    cursor: Cursor,
    len: usize,
}

pub struct Scanner<'t> {
    table: &'t TransitionTable,
    source: Vec<char>,
    cursor: Cursor,
    halted: Option<Error>,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t TransitionTable, source: &str) -> Scanner<'t> {
        Scanner {
            table,
            source: source.chars().collect(),
            cursor: Cursor::new(),
            halted: None,
        }
    }

    /// Character under the cursor, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.at(self.cursor.index)
    }

    fn at(&self, index: usize) -> Option<char> {
        self.source.get(index).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.index >= self.source.len()
    }

    pub fn line_number(&self) -> usize {
        self.cursor.line
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn has_error(&self) -> bool {
        self.halted.is_some()
    }

    /// Consumes spaces, tabs and newlines. Returns whether a token can
    /// still be requested: false at end of input or once an error was
    /// raised.
    pub fn skip_whitespace_and_check_remaining(&mut self) -> bool {
        if self.halted.is_some() {
            return false;
        }

        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.cursor.advance(c);
        }

        !self.at_eof()
    }

    /// Extracts the longest token starting at the cursor. Does not skip
    /// leading whitespace. Once this returns an error the scanner is
    /// halted and keeps returning that error.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = &self.halted {
            return Err(error.clone());
        }

        let start = self.cursor;
        let mut walk = self.cursor;
        let mut state = self.table.initial();
        let mut text = String::new();
        let mut checkpoint: Option<Checkpoint> = None;

        loop {
            // an empty prefix never counts as a match
            if walk.index > start.index && self.table.is_accepting(state) {
                checkpoint = Some(Checkpoint {
                    state,
                    cursor: walk,
                    len: text.len(),
                });
            }

            let Some(c) = self.at(walk.index) else {
                break;
            };
            let Some(next) = self.table.next(state, c) else {
                break;
            };

            text.push(c);
            walk.advance(c);
            state = next;
        }

        let Some(checkpoint) = checkpoint else {
            let error = Error::new(
                ErrorImpl::UnexpectedCharacter {
                    character: self.at(walk.index),
                },
                walk.position(),
            );
            log::debug!("{}", error);

            self.cursor = walk;
            self.halted = Some(error.clone());
            return Err(error);
        };

        self.cursor = checkpoint.cursor;
        text.truncate(checkpoint.len);

        let kind = if self.table.is_reserved(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Accepted(String::from(self.table.state_name(checkpoint.state)))
        };

        let token = MK_TOKEN!(
            kind,
            text,
            Span {
                start: start.position(),
                end: checkpoint.cursor.position()
            }
        );
        log::trace!("{} at {}:{}", token, token.span.start.line, token.span.start.column);

        Ok(token)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skip_whitespace_and_check_remaining() {
            return None;
        }

        Some(self.next_token())
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Scans the whole of `source`, stopping at the first lexical error.
pub fn tokenize(source: &str, table: &TransitionTable) -> Result<Vec<Token>, Error> {
    Scanner::new(table, source).collect()
}

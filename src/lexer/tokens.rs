use std::fmt::Display;

use crate::Span;

pub const KEYWORD_KIND: &str = "keyword";

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    /// Text found in the reserved-word set.
    Keyword,
    /// Name of the accepting state the token ended in.
    Accepted(String),
}

impl TokenKind {
    pub fn name(&self) -> &str {
        match self {
            TokenKind::Keyword => KEYWORD_KIND,
            TokenKind::Accepted(state) => state,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Keyword
    }
}

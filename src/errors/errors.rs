use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// True for failures raised while scanning source text, as opposed to
    /// failures in the table description.
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::MalformedRow { .. } => "MalformedRow",
            ErrorImpl::UnknownSymbolClass { .. } => "UnknownSymbolClass",
            ErrorImpl::MissingHeader { .. } => "MissingHeader",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character: Some(_) } => ErrorTip::None,
            ErrorImpl::UnexpectedCharacter { character: None } => ErrorTip::Suggestion(
                String::from("Input ended before any accepting state was reached"),
            ),
            ErrorImpl::MalformedRow { fields, .. } => ErrorTip::Suggestion(format!(
                "Expected `state symbol state`, found {} field(s)",
                fields
            )),
            ErrorImpl::UnknownSymbolClass { symbol } => ErrorTip::Suggestion(format!(
                "`{}` is neither a single character nor one of any_char, any_digit, whitespace, whitespace_no_endl, endl, anything_else",
                symbol
            )),
            ErrorImpl::MissingHeader { header } => ErrorTip::Suggestion(format!(
                "The table description must start with the {} line",
                header
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => write!(
                f,
                "Error at Line: {} Row: {} Unexpected character: {}",
                self.position.line,
                self.position.column,
                char_repr(character)
            ),
            other => write!(f, "Error at Line: {} {}", self.position.line, other),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    /// `None` when the input ran out mid-walk.
    #[error("unexpected character: {}", char_repr(.character))]
    UnexpectedCharacter { character: Option<char> },
    #[error("malformed transition row ({fields} fields): {row:?}")]
    MalformedRow { fields: usize, row: String },
    #[error("unknown symbol class {symbol:?}")]
    UnknownSymbolClass { symbol: String },
    #[error("missing {header} line")]
    MissingHeader { header: &'static str },
}

pub fn char_repr(character: &Option<char>) -> String {
    match character {
        Some(c) => c.escape_debug().to_string(),
        None => String::from("<EOF>"),
    }
}

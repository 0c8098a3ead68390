//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{char_repr, Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: Some('@'),
        },
        Position::new(10, 2, 4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert!(error.is_lexical());
}

#[test]
fn test_error_position() {
    let pos = Position::new(42, 3, 7);
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: None },
        pos,
    );

    assert_eq!(error.get_position().index, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_lexical_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: Some('$'),
        },
        Position::new(3, 2, 1),
    );

    assert_eq!(
        error.to_string(),
        "Error at Line: 2 Row: 1 Unexpected character: $"
    );
}

#[test]
fn test_lexical_error_display_escapes() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: Some('\t'),
        },
        Position::new(0, 1, 1),
    );

    assert_eq!(
        error.to_string(),
        "Error at Line: 1 Row: 1 Unexpected character: \\t"
    );
}

#[test]
fn test_char_repr() {
    assert_eq!(char_repr(&Some('a')), "a");
    assert_eq!(char_repr(&Some('\n')), "\\n");
    assert_eq!(char_repr(&None), "<EOF>");
}

#[test]
fn test_malformed_row_error() {
    let error = Error::new(
        ErrorImpl::MalformedRow {
            fields: 2,
            row: "init any_char".to_string(),
        },
        Position::new(0, 5, 1),
    );

    assert_eq!(error.get_error_name(), "MalformedRow");
    assert!(!error.is_lexical());
    assert_eq!(
        error.to_string(),
        "Error at Line: 5 malformed transition row (2 fields): \"init any_char\""
    );
}

#[test]
fn test_unknown_symbol_class_error() {
    let error = Error::new(
        ErrorImpl::UnknownSymbolClass {
            symbol: "letter".to_string(),
        },
        Position::new(0, 1, 1),
    );

    assert_eq!(error.get_error_name(), "UnknownSymbolClass");
}

#[test]
fn test_missing_header_error() {
    let error = Error::new(
        ErrorImpl::MissingHeader {
            header: "reserved words",
        },
        Position::new(0, 2, 1),
    );

    assert_eq!(error.get_error_name(), "MissingHeader");
    assert_eq!(error.to_string(), "Error at Line: 2 missing reserved words line");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            character: Some('@'),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: None },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }

    let error = Error::new(
        ErrorImpl::MalformedRow {
            fields: 4,
            row: "a b c d".to_string(),
        },
        Position::start(),
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Expected `state symbol state`, found 4 field(s)"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

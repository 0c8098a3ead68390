//! Lexical analysis driven by a transition table.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens. It handles:
//!
//! - Maximal-munch walks over the transition table with backtracking to
//!   the last accepting state
//! - Reclassification of reserved words as keywords
//! - Line and column tracking for error reporting
//! - Whitespace skipping between tokens

pub mod lexer;
pub mod tokens;

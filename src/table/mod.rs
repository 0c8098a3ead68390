//! Transition table construction.
//!
//! This module turns a compact table description into the concrete
//! transition function driving the scanner. It handles:
//!
//! - Symbol classes (letters, digits, whitespace, punctuation) and their
//!   expansion into concrete characters
//! - Accepting states and reserved words
//! - Parsing of the line-based table description format

pub mod classes;
pub mod table;

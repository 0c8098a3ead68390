//! Error types and error handling for the scanner.
//!
//! This module defines the single error type shared by table construction
//! and scanning. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for configuration and lexical failures
//! - Error formatting and display functionality
//! - Short suggestions for fixing a broken table description

pub mod errors;

#[cfg(test)]
mod tests;

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::errors::errors::ErrorImpl;

lazy_static! {
    pub static ref CLASS_LOOKUP: HashMap<&'static str, SymbolClass> = {
        let mut map = HashMap::new();
        map.insert("any_char", SymbolClass::Letter);
        map.insert("any_digit", SymbolClass::Digit);
        map.insert("whitespace", SymbolClass::Whitespace);
        map.insert("whitespace_no_endl", SymbolClass::WhitespaceNoEndl);
        map.insert("endl", SymbolClass::Endl);
        map.insert("anything_else", SymbolClass::Punctuation);
        map
    };
}

/// Members of `anything_else`.
pub const PUNCTUATION: &str = "'\"_\\/.*-;,!@#+()[]{}~`:?^&%$<>=|";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolClass {
    Letter,
    Digit,
    Whitespace, // includes '\n'
    WhitespaceNoEndl,
    Endl,
    Punctuation,
}

impl SymbolClass {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolClass::Letter => "any_char",
            SymbolClass::Digit => "any_digit",
            SymbolClass::Whitespace => "whitespace",
            SymbolClass::WhitespaceNoEndl => "whitespace_no_endl",
            SymbolClass::Endl => "endl",
            SymbolClass::Punctuation => "anything_else",
        }
    }

    /// The concrete characters this class stands for.
    pub fn symbols(&self) -> Vec<char> {
        match self {
            SymbolClass::Letter => ('a'..='z').chain('A'..='Z').collect(),
            SymbolClass::Digit => ('0'..='9').collect(),
            SymbolClass::Whitespace => vec![' ', '\t', '\n'],
            SymbolClass::WhitespaceNoEndl => vec![' ', '\t'],
            SymbolClass::Endl => vec!['\n'],
            SymbolClass::Punctuation => PUNCTUATION.chars().collect(),
        }
    }
}

impl Display for SymbolClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The middle field of a transition row.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SymbolSpec {
    Class(SymbolClass),
    Literal(char),
}

impl SymbolSpec {
    pub fn parse(field: &str) -> Result<SymbolSpec, ErrorImpl> {
        if let Some(class) = CLASS_LOOKUP.get(field) {
            return Ok(SymbolSpec::Class(*class));
        }

        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(SymbolSpec::Literal(c)),
            _ => Err(ErrorImpl::UnknownSymbolClass {
                symbol: String::from(field),
            }),
        }
    }

    pub fn symbols(&self) -> Vec<char> {
        match self {
            SymbolSpec::Class(class) => class.symbols(),
            SymbolSpec::Literal(c) => vec![*c],
        }
    }
}

impl From<char> for SymbolSpec {
    fn from(c: char) -> Self {
        SymbolSpec::Literal(c)
    }
}

impl From<SymbolClass> for SymbolSpec {
    fn from(class: SymbolClass) -> Self {
        SymbolSpec::Class(class)
    }
}

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::classes::SymbolSpec;

lazy_static! {
    static ref ROW_PATTERN: Regex = Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S+)\s*$").unwrap();
}

pub const INITIAL_STATE: &str = "init";
pub const COMMENT_MARKER: char = '#';

/// Interned state label. Only meaningful for the table that issued it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

/// Fully expanded transition function plus the accepting states and
/// reserved words that travel with it. Immutable once built.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    names: Vec<String>,
    ids: HashMap<String, StateId>,
    transitions: HashMap<(StateId, char), StateId>,
    accepting: HashSet<StateId>,
    reserved: HashSet<String>,
}

impl TransitionTable {
    fn empty() -> TransitionTable {
        let mut table = TransitionTable {
            names: vec![],
            ids: HashMap::new(),
            transitions: HashMap::new(),
            accepting: HashSet::new(),
            reserved: HashSet::new(),
        };
        table.intern(INITIAL_STATE);
        table
    }

    /// Parses the line-based description: accepting states, reserved words,
    /// then one `state symbol state` row per line. Lines starting with `#`
    /// and blank lines are skipped.
    pub fn parse(description: &str) -> Result<TransitionTable, Error> {
        let mut builder = TableBuilder::new();
        let mut offset = 0;

        for (i, line) in description.split_inclusive('\n').enumerate() {
            let position = Position::new(offset, i + 1, 1);
            offset += line.chars().count();
            let line = line.trim_end_matches(&['\n', '\r'][..]);

            match i {
                0 => {
                    builder.accepting(line.split_whitespace());
                }
                1 => {
                    builder.reserved(line.split_whitespace());
                }
                _ => {
                    builder.row(line, position)?;
                }
            }
        }

        let lines = description.split_inclusive('\n').count();
        if lines < 2 {
            let header = if lines == 0 { "accepting states" } else { "reserved words" };
            return Err(Error::new(
                ErrorImpl::MissingHeader { header },
                Position::new(description.chars().count(), lines + 1, 1),
            ));
        }

        Ok(builder.build())
    }

    fn intern(&mut self, name: &str) -> StateId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = StateId(self.names.len() as u32);
        self.names.push(String::from(name));
        self.ids.insert(String::from(name), id);
        id
    }

    pub fn initial(&self) -> StateId {
        StateId(0)
    }

    pub fn state(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    pub fn state_name(&self, id: StateId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn next(&self, from: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(&(from, symbol)).copied()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    pub fn is_reserved(&self, text: &str) -> bool {
        self.reserved.contains(text)
    }

    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = &str> {
        self.accepting.iter().map(|id| self.state_name(*id))
    }

    pub fn reserved_words(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }
}

impl Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut accepting: Vec<&str> = self.accepting_states().collect();
        accepting.sort_unstable();
        let mut reserved: Vec<&str> = self.reserved_words().collect();
        reserved.sort_unstable();

        writeln!(f, "accepting: {}", accepting.join(" "))?;
        writeln!(f, "reserved: {}", reserved.join(" "))?;

        let mut edges: Vec<(&str, char, &str)> = self
            .transitions
            .iter()
            .map(|((from, symbol), to)| (self.state_name(*from), *symbol, self.state_name(*to)))
            .collect();
        edges.sort_unstable();

        for (from, symbol, to) in edges {
            writeln!(f, "{} --{}--> {}", from, symbol.escape_debug(), to)?;
        }

        Ok(())
    }
}

/// Accumulates transitions, expanding symbol classes as they arrive.
/// A later entry for the same (state, character) replaces the earlier one.
pub struct TableBuilder {
    table: TransitionTable,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> TableBuilder {
        TableBuilder {
            table: TransitionTable::empty(),
        }
    }

    pub fn accepting<I, S>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for state in states {
            let id = self.table.intern(state.as_ref());
            self.table.accepting.insert(id);
        }
        self
    }

    pub fn reserved<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table.reserved.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn transition(&mut self, from: &str, symbol: impl Into<SymbolSpec>, to: &str) -> &mut Self {
        let from = self.table.intern(from);
        let to = self.table.intern(to);

        for c in symbol.into().symbols() {
            self.table.transitions.insert((from, c), to);
        }
        self
    }

    /// Adds one line of the table description. `position` locates the line
    /// for error reporting.
    pub fn row(&mut self, line: &str, position: Position) -> Result<&mut Self, Error> {
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            return Ok(self);
        }

        let Some(captures) = ROW_PATTERN.captures(line) else {
            return Err(Error::new(
                ErrorImpl::MalformedRow {
                    fields: line.split_whitespace().count(),
                    row: String::from(line),
                },
                position,
            ));
        };

        let symbol = SymbolSpec::parse(&captures[2]).map_err(|e| Error::new(e, position))?;
        Ok(self.transition(&captures[1], symbol, &captures[3]))
    }

    pub fn build(self) -> TransitionTable {
        let table = self.table;

        if table.accepting.is_empty() {
            log::warn!("transition table has no accepting states; every scan will fail");
        }

        for id in &table.accepting {
            let reachable = *id == table.initial() || table.transitions.values().any(|to| to == id);
            if !reachable {
                log::warn!(
                    "accepting state {:?} is never the target of a transition",
                    table.state_name(*id)
                );
            }
        }

        log::debug!(
            "built transition table: {} states, {} transitions, {} accepting, {} reserved",
            table.state_count(),
            table.transition_count(),
            table.accepting.len(),
            table.reserved.len()
        );

        table
    }
}

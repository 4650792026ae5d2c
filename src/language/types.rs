//! Types representing the segmented form of a proof script

use serde::Serialize;

/// A top-level statement of a proof script, from its first non-whitespace
/// character up to and including the terminating period. Offsets are byte
/// offsets into the text the statement was scanned from, half open.
#[derive(Eq, Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Statement {
    pub fn new(text: &str, start_offset: usize, end_offset: usize) -> Statement {
        Statement {
            text: text.to_string(),
            start_offset,
            end_offset,
        }
    }

    /// Whether the offset falls within [start, end).
    pub fn contains(&self, offset: usize) -> bool {
        self.start_offset <= offset && offset < self.end_offset
    }
}

/// Lexical class of the character following a '.', which decides whether
/// that period terminates a statement.
#[derive(Eq, Debug, Copy, Clone, PartialEq)]
pub enum CharClass {
    /// Start of the next segment of a qualified name, as in `A.B`
    IdentifierChar,
    /// Record field projection, as in state.`field
    Backtick,
    /// Anything else, including end of input
    Other,
}

impl CharClass {
    pub fn of(c: Option<char>) -> CharClass {
        match c {
            Some('`') => CharClass::Backtick,
            Some(c) if c.is_alphabetic() || c == '_' => CharClass::IdentifierChar,
            _ => CharClass::Other,
        }
    }

    /// A period is a terminator only when it is not joining a qualified
    /// name or opening a field projection.
    pub fn terminates(self) -> bool {
        self == CharClass::Other
    }
}

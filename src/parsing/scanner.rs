//! Locating statement boundaries in proof script text.
//!
//! A statement runs from its first non-whitespace character to the first
//! period that is a genuine terminator. Periods inside (nested) block
//! comments and string literals don't count, and neither do the periods
//! of qualified names (`A.B`) or record projections (state.`field).
//!
//! Everything here is a pure function of the text; offsets in and out
//! are byte offsets.

use tracing::trace;

use crate::language::{CharClass, Statement};
use crate::parsing::scope::{Layer, Scope};

/// Find the next statement at or after `from`. Returns None if only
/// whitespace remains, or if the remaining text does not reach a
/// terminator (including when a comment or string is still open at the
/// end), which means more input is needed rather than that anything is
/// wrong.
pub fn find_next_statement(text: &str, from: usize) -> Option<Statement> {
    let rest = text.get(from..)?;
    let trimmed = rest.trim_start();

    if trimmed.is_empty() {
        return None;
    }

    let start = from + (rest.len() - trimmed.len());
    let end = scan_to_terminator(text, start)?;

    Some(Statement::new(&text[start..end], start, end))
}

/// Walk forward from `start` and return the offset one past the
/// terminating period. All the delimiters involved are ASCII so we can
/// step over bytes; UTF-8 continuation bytes never match any of them.
fn scan_to_terminator(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut scope = Scope::new();
    let mut i = start;

    while i < bytes.len() {
        let rest = &bytes[i..];

        match scope.current() {
            Layer::Literal => {
                if rest[0] == b'"' {
                    scope.pop();
                }
                i += 1;
            }
            Layer::Comment => {
                if rest.starts_with(b"(*") {
                    scope.push(Layer::Comment);
                    i += 2;
                } else if rest.starts_with(b"*)") {
                    scope.pop();
                    i += 2;
                } else {
                    i += 1;
                }
            }
            Layer::Script => {
                if rest.starts_with(b"(*") {
                    scope.push(Layer::Comment);
                    i += 2;
                } else if rest[0] == b'"' {
                    scope.push(Layer::Literal);
                    i += 1;
                } else if rest[0] == b'.' {
                    let next = text[i + 1..]
                        .chars()
                        .next();
                    if CharClass::of(next).terminates() {
                        return Some(i + 1);
                    }
                    i += 1;
                } else {
                    i += 1;
                }
            }
        }
    }

    if scope.is_open() {
        trace!(
            depth = scope.comment_depth(),
            "Input ends inside a comment or string"
        );
    }
    None
}

/// Iterator over successive statements, each scan resuming where the
/// previous statement ended.
#[derive(Debug, Clone)]
pub struct Statements<'i> {
    text: &'i str,
    position: usize,
}

impl<'i> Statements<'i> {
    pub fn new(text: &'i str) -> Statements<'i> {
        Statements::starting_at(text, 0)
    }

    pub fn starting_at(text: &'i str, position: usize) -> Statements<'i> {
        Statements { text, position }
    }
}

impl<'i> Iterator for Statements<'i> {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        let statement = find_next_statement(self.text, self.position)?;
        self.position = statement.end_offset;
        Some(statement)
    }
}

/// The end offset of the last statement ending strictly before `offset`,
/// or None if no statement ends that early.
pub fn find_previous_statement_end(text: &str, offset: usize) -> Option<usize> {
    Statements::new(text)
        .take_while(|statement| statement.end_offset < offset)
        .last()
        .map(|statement| statement.end_offset)
}

/// Where stepping "to the cursor" should stop. A cursor anywhere on a
/// statement, including exactly at either end of it, selects that
/// statement's end; a cursor in the gap between statements selects the
/// end of the preceding one, and a cursor before the first statement
/// selects 0.
pub fn find_target_statement_end_for_cursor(text: &str, cursor: usize) -> usize {
    let mut previous = 0;

    for statement in Statements::new(text) {
        if statement.start_offset > cursor {
            break;
        }
        if cursor <= statement.end_offset {
            return statement.end_offset;
        }
        previous = statement.end_offset;
    }

    previous
}

pub fn get_all_statements(text: &str) -> Vec<Statement> {
    get_statements_between(text, 0, text.len())
}

/// Statements found by scanning from `start`, stopping at the first one
/// which starts at or beyond `end`.
pub fn get_statements_between(text: &str, start: usize, end: usize) -> Vec<Statement> {
    Statements::starting_at(text, start)
        .take_while(|statement| statement.start_offset < end)
        .collect()
}

pub fn count_statements(text: &str) -> usize {
    count_statements_between(text, 0, text.len())
}

pub fn count_statements_between(text: &str, start: usize, end: usize) -> usize {
    Statements::starting_at(text, start)
        .take_while(|statement| statement.start_offset < end)
        .count()
}

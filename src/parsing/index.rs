//! Cached statement sequence for one revision of a document.
//!
//! The index is rebuilt wholesale whenever the document changes, and then
//! answers the offset queries needed for stepping through a proof by
//! binary search over the (sorted, non-overlapping) statements.

use tracing::debug;

use crate::language::Statement;
use crate::parsing::scanner;

/// Outcome of [`StatementIndex::update`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// Version and length matched, cached statements kept
    Unchanged,
    /// Statements rescanned from the text
    Rebuilt,
}

#[derive(Debug, Clone, Default)]
pub struct StatementIndex {
    statements: Vec<Statement>,
    version: Option<i32>,
    length: usize,
}

impl StatementIndex {
    pub fn new() -> StatementIndex {
        StatementIndex::default()
    }

    /// Whether the cached statements were built from a document at this
    /// version and of this length.
    pub fn is_valid(&self, version: i32, length: usize) -> bool {
        self.version == Some(version) && self.length == length
    }

    /// Bring the index up to date with the given revision of the document.
    ///
    /// The check for whether a rebuild is necessary compares only the
    /// version and the text length, not the content. Callers must
    /// therefore never reuse a version number for different text; the
    /// document versions supplied by an editor satisfy this.
    pub fn update(&mut self, text: &str, version: i32) -> UpdateResult {
        if self.is_valid(version, text.len()) {
            return UpdateResult::Unchanged;
        }

        self.statements = scanner::get_all_statements(text);
        self.version = Some(version);
        self.length = text.len();

        debug!(
            "Indexed {} statement{} at version {}",
            self.statements
                .len(),
            if self
                .statements
                .len()
                == 1
            {
                ""
            } else {
                "s"
            },
            version
        );

        UpdateResult::Rebuilt
    }

    pub fn clear(&mut self) {
        self.statements
            .clear();
        self.version = None;
        self.length = 0;
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements
            .is_empty()
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The end offset stepping to this cursor position should reach; see
    /// [`scanner::find_target_statement_end_for_cursor`] for the rule.
    pub fn get_target_end_offset(&self, cursor: usize) -> usize {
        // first statement not wholly before the cursor
        let i = self
            .statements
            .partition_point(|statement| statement.end_offset < cursor);

        match self
            .statements
            .get(i)
        {
            Some(statement) if statement.start_offset <= cursor => statement.end_offset,
            _ => match i {
                0 => 0,
                _ => self.statements[i - 1].end_offset,
            },
        }
    }

    /// Statements which end at or before `offset`, in document order.
    pub fn get_statements_up_to(&self, offset: usize) -> &[Statement] {
        let i = self
            .statements
            .partition_point(|statement| statement.end_offset <= offset);
        &self.statements[..i]
    }

    /// Statements lying entirely within [start, end).
    pub fn get_statements_in_range(&self, start: usize, end: usize) -> &[Statement] {
        let first = self
            .statements
            .partition_point(|statement| statement.start_offset < start);
        let last = self
            .statements
            .partition_point(|statement| statement.end_offset <= end);

        if first < last {
            &self.statements[first..last]
        } else {
            &[]
        }
    }

    /// Position in the sequence of the statement containing `offset`, or
    /// None if the offset is in a gap between statements.
    pub fn find_statement_index_at_offset(&self, offset: usize) -> Option<usize> {
        let i = self
            .statements
            .partition_point(|statement| statement.end_offset <= offset);

        self.statements
            .get(i)
            .filter(|statement| statement.contains(offset))
            .map(|_| i)
    }

    /// How many statements are complete by `offset`.
    pub fn proved_count(&self, offset: usize) -> usize {
        self.get_statements_up_to(offset)
            .len()
    }

    /// The last statement complete by `offset`, if any.
    pub fn last_completed(&self, offset: usize) -> Option<&Statement> {
        self.get_statements_up_to(offset)
            .last()
    }
}

//! statement segmentation for proof scripts

use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

pub mod index;
pub mod scanner;
mod scope;

// Re-export the public API
pub use index::{StatementIndex, UpdateResult};
pub use scanner::{
    count_statements, count_statements_between, find_next_statement, find_previous_statement_end,
    find_target_statement_end_for_cursor, get_all_statements, get_statements_between, Statements,
};

/// Read a file and return an owned String. Used for proof scripts and for
/// captured transcripts of the interactive process alike.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Not valid UTF-8".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

use owo_colors::OwoColorize;

use crate::language::LoadingError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

/// Format a failure to serialize output
pub fn concise_output_error(error: &serde_json::Error) -> String {
    format!(
        "{}: {}",
        "error".bright_red(),
        error
            .to_string()
            .bold()
    )
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
pub fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin, counted in characters.
pub fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}

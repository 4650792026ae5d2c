// Types representing proof scripts as sequences of statements

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;

//! Synchronizing with the output of the interactive proof process

mod counter;
mod prompt;

// Re-export all public symbols
pub use counter::*;
pub use prompt::{find_prompts, Prompt};

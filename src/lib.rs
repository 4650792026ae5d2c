//! Statement segmentation and session synchronization for interactive
//! proof scripts.
//!
//! [`parsing`] finds where the period-terminated statements of a script
//! begin and end, and indexes them for navigation. [`session`] counts the
//! prompts the interactive process prints so the statements it has
//! acknowledged can be told apart from those still outstanding.

pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
pub mod session;

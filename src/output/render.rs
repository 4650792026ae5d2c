//! Renderers for colourizing command output

use owo_colors::OwoColorize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Syntax {
    Neutral,
    Ordinal,  // position of a statement in the script
    Location, // line:column
    Statement,
    Keyword,  // leading word of a statement
    Numeric,
    Label,
}

pub trait Render {
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Plain text, for piping and for tests.
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

/// Embellish fragments with ANSI escapes for terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Statement => content.to_string(),
            Syntax::Ordinal => content
                .bright_blue()
                .to_string(),
            Syntax::Location => content // #999999
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Keyword => content // #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Numeric => content // #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Label => content
                .bold()
                .to_string(),
        }
    }
}

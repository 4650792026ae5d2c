//! Output generation for the proofstep CLI application

use crate::language::Statement;
use crate::problem::{calculate_column_number, calculate_line_number};
use crate::session::PromptCounterState;

mod render;

pub use render::{Identity, Render, Syntax, Terminal};

/// One line per statement: its ordinal, where it starts, and its first
/// line of text.
pub fn render_statements(source: &str, statements: &[Statement], renderer: &impl Render) -> String {
    let width = statements
        .len()
        .to_string()
        .len();

    let mut result = String::new();

    for (i, statement) in statements
        .iter()
        .enumerate()
    {
        let line = calculate_line_number(source, statement.start_offset) + 1;
        let column = calculate_column_number(source, statement.start_offset) + 1;

        let ordinal = format!("{:>width$}", i + 1);
        let location = format!("{:<8}", format!("{}:{}", line, column));

        result.push_str(&renderer.style(Syntax::Ordinal, &ordinal));
        result.push(' ');
        result.push_str(&renderer.style(Syntax::Location, &location));
        result.push(' ');
        result.push_str(&render_summary(&statement.text, renderer));
        result.push('\n');
    }

    result
}

/// First line of a statement, leading keyword highlighted, with an
/// ellipsis if the statement continues onto further lines.
fn render_summary(text: &str, renderer: &impl Render) -> String {
    let mut lines = text.lines();
    let first = lines
        .next()
        .unwrap_or("");

    let (keyword, rest) = match first.find(|c: char| c.is_whitespace() || c == '.') {
        Some(i) => first.split_at(i),
        None => (first, ""),
    };

    let mut result = String::new();
    result.push_str(&renderer.style(Syntax::Keyword, keyword));
    result.push_str(&renderer.style(Syntax::Statement, rest));

    if lines
        .next()
        .is_some()
    {
        result.push_str(&renderer.style(Syntax::Neutral, " ..."));
    }

    result
}

pub fn render_target(target: usize, proved: usize, renderer: &impl Render) -> String {
    format!(
        "{} {}\n{} {}\n",
        renderer.style(Syntax::Label, "target:"),
        renderer.style(Syntax::Numeric, &target.to_string()),
        renderer.style(Syntax::Label, "proved:"),
        renderer.style(Syntax::Numeric, &proved.to_string()),
    )
}

pub fn render_counter_state(state: &PromptCounterState, renderer: &impl Render) -> String {
    let numbers: Vec<String> = state
        .all_prompt_numbers
        .iter()
        .map(|number| number.to_string())
        .collect();

    let flag = |value: bool| if value { "yes" } else { "no" };

    format!(
        "{} {}\n{} [{}]\n{} {}\n{} {}\n",
        renderer.style(Syntax::Label, "responses:"),
        renderer.style(
            Syntax::Numeric,
            &state
                .total_response_prompts
                .to_string()
        ),
        renderer.style(Syntax::Label, "prompts:"),
        renderer.style(Syntax::Numeric, &numbers.join(", ")),
        renderer.style(Syntax::Label, "startup ignored:"),
        flag(state.ignored_startup_prompt),
        renderer.style(Syntax::Label, "leading ignored:"),
        flag(state.ignored_leading_prompt),
    )
}

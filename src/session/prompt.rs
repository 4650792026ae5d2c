//! Recognizing the `[<number>|<tag>]>` prompts printed by the interactive
//! process each time it finishes with a unit of input.

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Longest trailing fragment we are prepared to hold back waiting for the
/// rest of a prompt, until a longer prompt has been seen.
pub const MAX_PENDING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt<'i> {
    pub number: u64,
    pub tag: &'i str,
    pub start: usize,
    pub end: usize,
}

/// Find every complete prompt in the text, in order. Offsets are relative
/// to the text given.
pub fn find_prompts(text: &str) -> Vec<Prompt<'_>> {
    let re = regex!(r"\[(\d+)\|([A-Za-z0-9_]+)\]>");

    re.captures_iter(text)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let number = cap
                .get(1)?
                .as_str()
                .parse::<u64>()
                .ok()?;
            let tag = cap
                .get(2)?
                .as_str();

            Some(Prompt {
                number,
                tag,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// If the text from `from` onwards ends with something that could still
/// turn into a prompt once more output arrives, return where that
/// fragment begins. Fragments longer than `limit` bytes are not prompts.
pub fn partial_prompt_start(text: &str, from: usize, limit: usize) -> Option<usize> {
    let tail = text.get(from..)?;
    let i = tail.rfind('[')?;
    let fragment = &tail[i..];

    if fragment.len() <= limit && is_prompt_prefix(fragment) {
        Some(from + i)
    } else {
        None
    }
}

fn is_prompt_prefix(fragment: &str) -> bool {
    let re = regex!(r"^\[(\d+(\|([A-Za-z0-9_]+\]?)?)?)?$");
    re.is_match(fragment)
}

//! Counting the prompts that acknowledge submitted statements.
//!
//! The interactive process prints a prompt after each unit of input it
//! finishes with. The stepping controller needs to know how many of the
//! statements it sent have been acknowledged, so it feeds everything read
//! from the process's stdout through a [`PromptCounter`]. Not every prompt
//! answers a statement though:
//!
//! - the process greets us with prompt 0 when it starts, and
//! - the operating system can hand us the previous command's trailing
//!   prompt glued onto the front of the next command's output.
//!
//! Both are recognized and excluded. Reads are split wherever the
//! operating system pleases, so a prompt cut in two is held back until
//! the rest of it arrives.

use serde::Serialize;
use tracing::{debug, trace};

use super::prompt::{find_prompts, partial_prompt_start, MAX_PENDING};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CounterOptions {
    /// Whether reset() makes the next first prompt eligible for the
    /// startup exclusion again, as is appropriate when the process has
    /// been restarted. When false the startup exclusion only ever
    /// applies once over the life of the counter.
    pub rearm_startup_on_reset: bool,
}

impl Default for CounterOptions {
    fn default() -> Self {
        CounterOptions {
            rearm_startup_on_reset: true,
        }
    }
}

/// Running totals for one session with the interactive process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromptCounterState {
    pub total_response_prompts: usize,
    pub all_prompt_numbers: Vec<u64>,
    pub ignored_startup_prompt: bool,
    pub ignored_leading_prompt: bool,
}

/// What a single chunk of output contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub total_prompts: usize,
    pub response_prompts: usize,
    pub prompt_numbers: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct PromptCounter {
    state: PromptCounterState,
    options: CounterOptions,
    awaiting_first: bool,
    pending: String,
    pending_leads: bool,
    undecoded: Vec<u8>,
    longest_prompt: usize,
}

impl Default for PromptCounter {
    fn default() -> Self {
        PromptCounter::new()
    }
}

impl PromptCounter {
    pub fn new() -> PromptCounter {
        PromptCounter::with_options(CounterOptions::default())
    }

    pub fn with_options(options: CounterOptions) -> PromptCounter {
        PromptCounter {
            state: PromptCounterState::default(),
            options,
            awaiting_first: true,
            pending: String::new(),
            pending_leads: false,
            undecoded: Vec::new(),
            longest_prompt: MAX_PENDING,
        }
    }

    pub fn state(&self) -> &PromptCounterState {
        &self.state
    }

    pub fn snapshot(&self) -> PromptCounterState {
        self.state
            .clone()
    }

    /// Output held back because it may be the beginning of a prompt.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Start a new batch of submissions, such as one "step to cursor"
    /// operation. The leading prompt exclusion may fire once per batch.
    pub fn begin_batch(&mut self) {
        self.state
            .ignored_leading_prompt = false;
    }

    /// Forget everything seen so far and start a fresh view of the
    /// session. How long a prompt can be is a property of the process, not
    /// of the session, and is kept.
    pub fn reset(&mut self) {
        let startup = self
            .state
            .ignored_startup_prompt;

        self.state = PromptCounterState::default();
        self.pending
            .clear();
        self.pending_leads = false;
        self.undecoded
            .clear();

        if self
            .options
            .rearm_startup_on_reset
        {
            self.awaiting_first = true;
        } else {
            self.state
                .ignored_startup_prompt = startup;
        }
    }

    /// Account for one chunk of output read from the process.
    ///
    /// A trailing fragment that could still become a prompt is held back
    /// until the next chunk. Fragments are held back up to 64 bytes, or up
    /// to the length of the longest prompt seen so far if that is more; a
    /// prompt with a longer tag that is split before it has ever been seen
    /// whole is lost.
    pub fn ingest_chunk(&mut self, chunk: &str) -> ChunkSummary {
        let mut summary = ChunkSummary::default();

        if chunk.is_empty() {
            return summary;
        }

        let carry = self
            .pending
            .len();
        let carried_leads = carry == 0 || self.pending_leads;

        let mut buffer = std::mem::take(&mut self.pending);
        buffer.push_str(chunk);

        // whether only whitespace precedes this position in its read. The
        // carried fragment only ever begins at 0, so a position inside it
        // belongs to the previous read; anything else is judged by this
        // chunk alone.
        let leads_at = |position: usize| {
            if position < carry {
                carried_leads
                    && buffer[..position]
                        .trim()
                        .is_empty()
            } else {
                buffer[carry..position]
                    .trim()
                    .is_empty()
            }
        };

        let prompts = find_prompts(&buffer);

        for prompt in &prompts {
            self.longest_prompt = self
                .longest_prompt
                .max(prompt.end - prompt.start);
        }

        let scanned = prompts
            .last()
            .map(|prompt| prompt.end)
            .unwrap_or(0);

        let held = partial_prompt_start(&buffer, scanned, self.longest_prompt);

        for prompt in &prompts {
            self.state
                .all_prompt_numbers
                .push(prompt.number);
            summary
                .prompt_numbers
                .push(prompt.number);
            summary.total_prompts += 1;

            if self.awaiting_first {
                self.awaiting_first = false;

                if prompt.number == 0 {
                    debug!("Ignoring startup prompt [{}|{}]>", prompt.number, prompt.tag);
                    self.state
                        .ignored_startup_prompt = true;
                    continue;
                }
            }

            let first = leads_at(prompt.start);
            let more = !buffer[prompt.end..]
                .trim()
                .is_empty();

            if first
                && more
                && !self
                    .state
                    .ignored_leading_prompt
            {
                debug!(
                    "Ignoring leading prompt [{}|{}]> coalesced with following output",
                    prompt.number, prompt.tag
                );
                self.state
                    .ignored_leading_prompt = true;
                continue;
            }

            self.state
                .total_response_prompts += 1;
            summary.response_prompts += 1;
        }

        if let Some(i) = held {
            trace!(fragment = &buffer[i..], "Holding back partial prompt");
            self.pending_leads = leads_at(i);
            self.pending = buffer[i..].to_string();
        }

        trace!(
            prompts = summary.total_prompts,
            responses = summary.response_prompts,
            total = self
                .state
                .total_response_prompts,
            "Ingested chunk"
        );

        summary
    }

    /// Account for raw bytes read from the process. A multi-byte UTF-8
    /// character split across reads is held back until it is complete;
    /// invalid sequences are replaced.
    pub fn ingest_bytes(&mut self, chunk: &[u8]) -> ChunkSummary {
        let mut bytes = std::mem::take(&mut self.undecoded);
        bytes.extend_from_slice(chunk);

        let split = complete_utf8_prefix(&bytes);
        self.undecoded = bytes[split..].to_vec();

        let text = String::from_utf8_lossy(&bytes[..split]);
        self.ingest_chunk(&text)
    }

    /// The process's output has ended. Bytes still waiting for the rest of
    /// a UTF-8 sequence are decoded as they are, with replacement, and
    /// accounted for.
    pub fn finish(&mut self) -> ChunkSummary {
        let bytes = std::mem::take(&mut self.undecoded);
        let text = String::from_utf8_lossy(&bytes);
        self.ingest_chunk(&text)
    }
}

/// Length of the longest prefix of the bytes that does not end partway
/// through a multi-byte UTF-8 sequence.
fn complete_utf8_prefix(bytes: &[u8]) -> usize {
    let len = bytes.len();

    for back in 1..=len.min(3) {
        let b = bytes[len - back];

        // continuation byte, keep looking for the lead byte
        if b & 0b1100_0000 == 0b1000_0000 {
            continue;
        }

        let width = match b {
            0xF0..=0xFF => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        };

        return if width > back { len - back } else { len };
    }

    len
}

use std::io::IsTerminal;
use std::path::Path;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, Level};

use proofstep::language::Statement;
use proofstep::output::{self, Identity, Render, Terminal};
use proofstep::parsing::{self, StatementIndex};
use proofstep::problem::{concise_loading_error, concise_output_error};
use proofstep::session::PromptCounter;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("proofstep")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Statement segmentation and prompt synchronization for proof scripts.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("statements")
                .about("List the statements of the given proof script")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the statements and their offsets as JSON."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the proof script you want to segment."),
                ),
        )
        .subcommand(
            Command::new("target")
                .about("Show where stepping to the given cursor position would stop")
                .arg(
                    Arg::new("offset")
                        .long("offset")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Cursor position, as a byte offset into the file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the proof script."),
                ),
        )
        .subcommand(
            Command::new("prompts")
                .about("Replay a captured transcript of the interactive process and count its prompts")
                .arg(
                    Arg::new("chunk-size")
                        .long("chunk-size")
                        .value_parser(value_parser!(usize))
                        .default_value("4096")
                        .help("Feed the transcript to the counter this many bytes at a time."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the final counter state as JSON."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing output captured from the interactive process."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("statements", submatches)) => {
            if std::io::stdout().is_terminal() {
                run_statements(submatches, &Terminal)
            } else {
                run_statements(submatches, &Identity)
            }
        }
        Some(("target", submatches)) => {
            if std::io::stdout().is_terminal() {
                run_target(submatches, &Terminal)
            } else {
                run_target(submatches, &Identity)
            }
        }
        Some(("prompts", submatches)) => {
            if std::io::stdout().is_terminal() {
                run_prompts(submatches, &Terminal)
            } else {
                run_prompts(submatches, &Identity)
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: proofstep [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Read the file named on the command line, or report why not and exit.
fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("{}", concise_output_error(&error));
            std::process::exit(1);
        }
    }
}

fn run_statements(submatches: &ArgMatches, renderer: &impl Render) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);
    let content = load_or_exit(filename);

    let statements: Vec<Statement> = parsing::get_all_statements(&content);
    debug!(
        "Found {} statement{}",
        statements.len(),
        if statements.len() == 1 { "" } else { "s" }
    );

    if submatches.get_flag("json") {
        print_json(&statements);
    } else {
        print!(
            "{}",
            output::render_statements(&content, &statements, renderer)
        );
    }
}

fn run_target(submatches: &ArgMatches, renderer: &impl Render) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let cursor = submatches
        .get_one::<usize>("offset")
        .copied()
        .unwrap_or(0);

    let filename = Path::new(filename);
    let content = load_or_exit(filename);

    let mut index = StatementIndex::new();
    index.update(&content, 0);

    let target = index.get_target_end_offset(cursor);
    let proved = index.proved_count(target);

    print!("{}", output::render_target(target, proved, renderer));
}

fn run_prompts(submatches: &ArgMatches, renderer: &impl Render) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let size = submatches
        .get_one::<usize>("chunk-size")
        .copied()
        .unwrap_or(4096)
        .max(1);

    let filename = Path::new(filename);
    let content = load_or_exit(filename);

    let mut counter = PromptCounter::new();
    for chunk in content
        .as_bytes()
        .chunks(size)
    {
        let summary = counter.ingest_bytes(chunk);
        debug!(?summary);
    }
    counter.finish();

    if submatches.get_flag("json") {
        print_json(counter.state());
    } else {
        print!("{}", output::render_counter_state(counter.state(), renderer));
    }
}

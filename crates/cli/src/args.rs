// crates/cli/src/args.rs
use std::ffi::OsString;

use clap::{CommandFactory, Parser, ValueHint};

/// Arguments of the `wordfreq` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wordfreq",
    version = crate::VERSION,
    about = "Counts the number of occurrences of each word in a file",
    disable_help_flag = true
)]
pub struct WordFreqArgs {
    /// Text file to read
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub file: Option<OsString>,

    /// Number of words to report (default 10, zero or negative reports none)
    #[arg(long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Shortest word, in characters, that is counted (default 4)
    #[arg(long = "min-length")]
    pub min_length: Option<usize>,

    /// Log pipeline details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Show usage
    #[arg(short = 'h', long)]
    pub help: bool,
}

/// Arguments of the `jsonkeys` binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsonkeys",
    version = crate::VERSION,
    about = "Prints selected or all flattened keys of a JSON document",
    disable_help_flag = true
)]
pub struct JsonKeysArgs {
    /// JSON file to read
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub file: Option<OsString>,

    /// Keys to extract, comma separated; use a dot for nested keys (key.subkey)
    #[arg(long)]
    pub keys: Option<String>,

    /// Log pipeline details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Show usage
    #[arg(short = 'h', long)]
    pub help: bool,
}

/// Long flag names of a clap command, used to accept the single-dash `-flag` spelling.
pub fn long_flags<A: CommandFactory>() -> Vec<String> {
    A::command()
        .get_arguments()
        .filter_map(clap::Arg::get_long)
        .map(str::to_owned)
        .collect()
}

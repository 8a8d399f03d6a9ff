// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod json;
pub mod words;

use textscan_shared_kernel::{RankedEntry, ResolvedEntry};

use crate::config::{JsonKeysConfig, WordFreqConfig};
use crate::error::Result;
use crate::words::Tokenizer;

/// Count the words of `config.file` and return the most frequent ones.
///
/// # Errors
///
/// Returns `EngineError::ReadFailure` if the file cannot be opened or read.
pub fn run_word_frequency(config: &WordFreqConfig) -> Result<Vec<RankedEntry>> {
    let tokenizer = Tokenizer::new(config.min_len);
    let frequencies = words::count_file(&config.file, &tokenizer)?;
    let ranked = frequencies.rank(config.top_n);
    log::debug!("ranked {} of {} distinct tokens", ranked.len(), frequencies.len());
    Ok(ranked)
}

/// Load `config.file` and extract either the requested keys or every leaf.
///
/// # Errors
///
/// Returns `EngineError::ReadFailure` or `EngineError::ParseFailure`; missing
/// keys are not errors.
pub fn run_json_keys(config: &JsonKeysConfig) -> Result<Vec<ResolvedEntry>> {
    let root = json::load_file(&config.file)?;
    let entries = if config.flatten_all() {
        json::flatten(&root)
    } else {
        json::resolve_all(&root, &config.keys)
    };
    Ok(entries)
}

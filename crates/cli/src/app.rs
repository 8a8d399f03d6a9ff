// crates/cli/src/app.rs
use std::io::Write;

use crate::args::{JsonKeysArgs, WordFreqArgs};
use crate::config::{Invocation, JsonKeysConfig, WordFreqConfig};
use crate::error::Result;
use crate::presentation;

/// Run `wordfreq` with parsed arguments, writing the report to `out`.
///
/// # Errors
///
/// Fails when the input cannot be read or the report cannot be written.
pub fn run_word_freq<W: Write>(args: &WordFreqArgs, out: &mut W) -> Result<()> {
    match Invocation::<WordFreqConfig>::try_from(args)? {
        Invocation::ShowUsage => presentation::write_usage(out, presentation::WORD_FREQ_USAGE)?,
        Invocation::Run(config) => {
            log::debug!("counting words in {}", config.file.display());
            let ranked = textscan_engine::run_word_frequency(&config)?;
            presentation::write_top_words(out, &ranked)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run `jsonkeys` with parsed arguments, writing the report to `out`.
///
/// # Errors
///
/// Fails when the input cannot be read or parsed, or the report cannot be
/// written. Keys that are absent from the document are not errors.
pub fn run_json_keys<W: Write>(args: &JsonKeysArgs, out: &mut W) -> Result<()> {
    match Invocation::<JsonKeysConfig>::try_from(args)? {
        Invocation::ShowUsage => presentation::write_usage(out, presentation::JSON_KEYS_USAGE)?,
        Invocation::Run(config) => {
            log::debug!(
                "extracting {} from {}",
                if config.flatten_all() { "all keys" } else { "selected keys" },
                config.file.display()
            );
            let entries = textscan_engine::run_json_keys(&config)?;
            presentation::write_entries(out, &entries)?;
        }
    }
    out.flush()?;
    Ok(())
}

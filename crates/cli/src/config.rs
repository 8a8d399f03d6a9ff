// crates/cli/src/config.rs
use crate::args::{JsonKeysArgs, WordFreqArgs};
use crate::error::Result;
use crate::parsers::{non_negative, parse_key_list};
pub use textscan_engine::config::{
    DEFAULT_TOP_N, JsonKeysConfig, JsonKeysConfigBuilder, MIN_WORD_LENGTH, WordFreqConfig,
    WordFreqConfigBuilder,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// What a binary should do once its arguments are parsed.
#[derive(Debug, Clone)]
pub enum Invocation<C> {
    ShowUsage,
    Run(C),
}

/// An empty `--file=` counts as absent.
fn input_file(file: Option<&OsString>) -> Option<PathBuf> {
    file.filter(|path| !path.is_empty()).map(PathBuf::from)
}

impl TryFrom<&WordFreqArgs> for Invocation<WordFreqConfig> {
    type Error = crate::error::AppError;

    fn try_from(args: &WordFreqArgs) -> Result<Self> {
        let Some(file) = input_file(args.file.as_ref()).filter(|_| !args.help) else {
            return Ok(Self::ShowUsage);
        };

        let mut builder = WordFreqConfigBuilder::default();
        builder
            .file(file)
            .top_n(args.top.map_or(DEFAULT_TOP_N, non_negative))
            .min_len(args.min_length.unwrap_or(MIN_WORD_LENGTH));
        Ok(Self::Run(WordFreqConfig::from_builder(&builder)?))
    }
}

impl TryFrom<&JsonKeysArgs> for Invocation<JsonKeysConfig> {
    type Error = crate::error::AppError;

    fn try_from(args: &JsonKeysArgs) -> Result<Self> {
        let Some(file) = input_file(args.file.as_ref()).filter(|_| !args.help) else {
            return Ok(Self::ShowUsage);
        };

        let mut builder = JsonKeysConfigBuilder::default();
        builder
            .file(file)
            .keys(args.keys.as_deref().map(parse_key_list).unwrap_or_default());
        Ok(Self::Run(JsonKeysConfig::from_builder(&builder)?))
    }
}

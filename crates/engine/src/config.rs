use derive_builder::Builder;
use std::path::PathBuf;
use textscan_shared_kernel::KeyPath;

use crate::error::{EngineError, Result};

/// How many ranked words are reported when the caller does not say.
pub const DEFAULT_TOP_N: usize = 10;

/// Tokens shorter than this many code points are not counted.
pub const MIN_WORD_LENGTH: usize = 4;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WordFreqConfig {
    pub file: PathBuf,
    #[builder(default = "DEFAULT_TOP_N")]
    pub top_n: usize,
    #[builder(default = "MIN_WORD_LENGTH")]
    pub min_len: usize,
}

impl WordFreqConfig {
    /// # Errors
    ///
    /// Returns `EngineError::Config` when no input file was supplied.
    pub fn from_builder(builder: &WordFreqConfigBuilder) -> Result<Self> {
        builder.build().map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct JsonKeysConfig {
    pub file: PathBuf,
    /// Requested dotted keys; empty means every leaf is reported.
    #[builder(default)]
    pub keys: Vec<KeyPath>,
}

impl JsonKeysConfig {
    /// # Errors
    ///
    /// Returns `EngineError::Config` when no input file was supplied.
    pub fn from_builder(builder: &JsonKeysConfigBuilder) -> Result<Self> {
        builder.build().map_err(|e| EngineError::Config(e.to_string()))
    }

    pub fn flatten_all(&self) -> bool {
        self.keys.is_empty()
    }
}

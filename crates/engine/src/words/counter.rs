use std::collections::HashMap;
use std::collections::hash_map;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use textscan_shared_kernel::{Occurrences, RankedEntry};

use super::Tokenizer;
use crate::error::{EngineError, Result};

/// Occurrence count per lower-cased token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, Occurrences>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: impl Into<String>) {
        self.counts.entry(token.into()).or_default().increment();
    }

    pub fn get(&self, token: &str) -> Option<Occurrences> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of counted tokens, repeats included.
    pub fn total(&self) -> Occurrences {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Occurrences> {
        self.counts.iter()
    }

    pub fn rank(&self, top_n: usize) -> Vec<RankedEntry> {
        super::rank(self, top_n)
    }
}

impl<S: Into<String>> FromIterator<S> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut frequencies = Self::new();
        iter.into_iter().for_each(|token| frequencies.record(token));
        frequencies
    }
}

impl<'a> IntoIterator for &'a WordFrequencies {
    type Item = (&'a String, &'a Occurrences);
    type IntoIter = hash_map::Iter<'a, String, Occurrences>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count tokens line by line.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which the tokenizer treats
/// as a separator, so binary noise never aborts the count.
///
/// # Errors
///
/// Returns the underlying I/O error if a read fails; no partial counts are
/// handed back.
pub fn count_reader<R: BufRead>(reader: &mut R, tokenizer: &Tokenizer) -> io::Result<WordFrequencies> {
    let mut frequencies = WordFrequencies::new();
    let mut line_buf = Vec::new();
    let mut lines = 0usize;

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        lines += 1;
        let line = String::from_utf8_lossy(&line_buf);
        for token in tokenizer.tokens(&line) {
            frequencies.record(token);
        }
    }

    log::trace!("tokenized {lines} lines");
    Ok(frequencies)
}

/// Open `path` and count its tokens.
///
/// # Errors
///
/// Returns `EngineError::ReadFailure` if the file cannot be opened or a read
/// fails part way through.
pub fn count_file(path: &Path, tokenizer: &Tokenizer) -> Result<WordFrequencies> {
    let file = File::open(path).map_err(|e| EngineError::read(path, e))?;
    let mut reader = BufReader::new(file);
    let frequencies = count_reader(&mut reader, tokenizer).map_err(|e| EngineError::read(path, e))?;

    log::debug!(
        "{}: {} tokens, {} distinct",
        path.display(),
        frequencies.total(),
        frequencies.len()
    );
    Ok(frequencies)
}

// crates/shared-kernel/src/value_objects/entries.rs
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::Occurrences;

/// One row of the word ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: Occurrences,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: impl Into<Occurrences>) -> Self {
        Self {
            token: token.into(),
            count: count.into(),
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.count)
    }
}

/// A dotted path paired with the JSON value found there.
///
/// `path` is either the key exactly as the user requested it or the path
/// rebuilt while flattening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    pub path: String,
    pub value: Value,
}

impl ResolvedEntry {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

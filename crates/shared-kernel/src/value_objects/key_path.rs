// crates/shared-kernel/src/value_objects/key_path.rs
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between the segments of a dotted key.
pub const SEGMENT_SEPARATOR: char = '.';

/// A user supplied dotted key such as `customer.address.city`.
///
/// The raw text is kept for reporting; `segments` holds the pieces used to walk
/// a JSON document. Dots cannot be escaped, so a key that itself contains `.`
/// is not addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            segments: raw.split(SEGMENT_SEPARATOR).map(str::to_owned).collect(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for KeyPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

use regex::Regex;
use std::sync::OnceLock;

/// A token is a maximal run of Latin or Cyrillic letters and ASCII digits.
const WORD_PATTERN: &str = "[a-zA-Zа-яА-ЯёЁ0-9]+";

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN is a valid regex"))
}

/// Splits lines into lower-cased tokens of at least `min_len` code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
}

impl Tokenizer {
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Length is measured in `char`s, not bytes, so a four letter Cyrillic
    /// word (eight bytes) qualifies exactly like a four letter Latin one.
    pub fn tokens<'a>(&self, line: &'a str) -> impl Iterator<Item = String> + use<'a> {
        let min_len = self.min_len;
        word_regex()
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(move |word| word.chars().count() >= min_len)
            .map(str::to_lowercase)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(crate::config::MIN_WORD_LENGTH)
    }
}

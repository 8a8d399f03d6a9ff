// crates/cli/src/presentation.rs
use serde_json::Value;
use std::borrow::Cow;
use std::io::{self, Write};
use textscan_shared_kernel::{RankedEntry, ResolvedEntry};

pub const WORD_FREQ_USAGE: &str = "\
Counts the number of occurrences of each word in a file.
Usage: wordfreq -file=words.txt [-top=10] [-min-length=4] [-verbose]
";

pub const JSON_KEYS_USAGE: &str = "\
JSON Parser
Usage: jsonkeys --file=order.json [--keys=key1,key2.subkey,...]
Example: jsonkeys --file=order.json --keys=id,customer.name
";

pub const TOP_WORDS_BANNER: &str = "Top words are:";

pub fn write_usage<W: Write>(out: &mut W, usage: &str) -> io::Result<()> {
    out.write_all(usage.as_bytes())
}

pub fn write_top_words<W: Write>(out: &mut W, entries: &[RankedEntry]) -> io::Result<()> {
    writeln!(out, "{TOP_WORDS_BANNER}")?;
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

pub fn write_entries<W: Write>(out: &mut W, entries: &[ResolvedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}: {}", entry.path, render_value(&entry.value))?;
    }
    Ok(())
}

/// Strings print bare; every other kind prints as compact JSON.
pub fn render_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn top_words_have_banner() {
        let out = rendered(|w| write_top_words(w, &[RankedEntry::new("test", 3usize)]));
        assert_eq!(out, "Top words are:\ntest: 3\n");

        let empty = rendered(|w| write_top_words(w, &[]));
        assert_eq!(empty, "Top words are:\n");
    }

    #[test]
    fn entries_render_one_per_line() {
        let entries = [
            ResolvedEntry::new("id", json!(1)),
            ResolvedEntry::new("customer.name", json!("Ada")),
        ];
        let out = rendered(|w| write_entries(w, &entries));
        assert_eq!(out, "id: 1\ncustomer.name: Ada\n");
    }

    #[test]
    fn values_render_deterministically() {
        assert_eq!(render_value(&json!("plain")), "plain");
        assert_eq!(render_value(&json!(null)), "null");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(2.5)), "2.5");
        assert_eq!(render_value(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(render_value(&json!({"b": 1, "a": 2})), r#"{"a":2,"b":1}"#);
    }
}

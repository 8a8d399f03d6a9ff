// crates/cli/src/parsers.rs
use std::ffi::OsString;

use textscan_shared_kernel::KeyPath;

/// Rewrite single-dash long flags (`-file=x`, `-file x`, `-help`) to
/// their double-dash form so clap accepts them.
///
/// Only names listed in `known_longs` are touched, so negative numbers and
/// values that merely start with `-` pass through. Nothing after a bare `--`
/// is rewritten.
pub fn normalize_single_dash_flags<I, T>(args: I, known_longs: &[String]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    let mut out = Vec::new();

    for arg in args.into_iter().map(Into::into) {
        if after_terminator {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            after_terminator = true;
            out.push(arg);
            continue;
        }
        match arg.to_str().and_then(|s| rewrite_single_dash(s, known_longs)) {
            Some(rewritten) => out.push(OsString::from(rewritten)),
            None => out.push(arg),
        }
    }
    out
}

fn rewrite_single_dash(arg: &str, known_longs: &[String]) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    known_longs
        .iter()
        .any(|known| known == name)
        .then(|| format!("-{arg}"))
}

/// Split a comma separated `--keys` value into dotted key paths.
///
/// An empty value means no keys were requested. Empty items between commas
/// are kept, as the empty key is a legal JSON object key.
pub fn parse_key_list(raw: &str) -> Vec<KeyPath> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(KeyPath::parse).collect()
}

/// Clamp a signed count from the command line; zero and negatives mean none.
pub fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

use std::cmp::Ordering;

use textscan_shared_kernel::RankedEntry;

use super::WordFrequencies;

/// Most frequent first; equal counts fall back to the token so the output is
/// reproducible.
fn by_rank(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
}

/// The `top_n` most frequent tokens.
///
/// Returns every token when the vocabulary is smaller than `top_n`, and
/// nothing when `top_n` is zero.
pub fn rank(frequencies: &WordFrequencies, top_n: usize) -> Vec<RankedEntry> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut entries: Vec<RankedEntry> = frequencies
        .iter()
        .map(|(token, count)| RankedEntry::new(token.as_str(), *count))
        .collect();
    entries.sort_unstable_by(by_rank);
    entries.truncate(top_n);
    entries
}

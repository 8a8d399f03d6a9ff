use serde_json::Value;
use textscan_shared_kernel::ResolvedEntry;
use textscan_shared_kernel::value_objects::key_path::SEGMENT_SEPARATOR;

/// Extend `prefix` by one key. `None` is the root, so top-level keys appear
/// without a leading separator; an empty top-level key stays distinct from it.
fn join_path(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        None => key.to_owned(),
        Some(prefix) => format!("{prefix}{SEGMENT_SEPARATOR}{key}"),
    }
}

/// Every leaf reachable through nested objects, paired with its dotted path.
///
/// Arrays and scalars are leaves and are emitted whole. Keys are visited in
/// sorted order at each level. An empty nested object has no leaves and
/// contributes nothing; a non-object root is itself a leaf with an empty path.
pub fn flatten(root: &Value) -> Vec<ResolvedEntry> {
    let mut entries = Vec::new();
    flatten_into(root, None, &mut entries);
    log::debug!("flattened {} leaves", entries.len());
    entries
}

fn flatten_into(value: &Value, prefix: Option<&str>, out: &mut Vec<ResolvedEntry>) {
    match value {
        Value::Object(map) => {
            let mut children: Vec<_> = map.iter().collect();
            children.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, child) in children {
                flatten_into(child, Some(&join_path(prefix, key)), out);
            }
        }
        leaf => out.push(ResolvedEntry::new(prefix.unwrap_or_default(), leaf.clone())),
    }
}

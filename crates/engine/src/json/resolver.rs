use serde_json::Value;
use textscan_shared_kernel::{KeyPath, ResolvedEntry};

/// Walk `root` one segment at a time.
///
/// Only objects are descended into. A missing key, or any segment that meets
/// an array or scalar, yields `None`.
pub fn resolve<'v>(root: &'v Value, path: &KeyPath) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            _ => None,
        })
}

/// Resolve each requested key in order, silently skipping the ones that do
/// not exist.
pub fn resolve_all(root: &Value, keys: &[KeyPath]) -> Vec<ResolvedEntry> {
    let entries: Vec<_> = keys
        .iter()
        .filter_map(|key| {
            let found = resolve(root, key);
            if found.is_none() {
                log::debug!("key '{key}' not found");
            }
            found.map(|value| ResolvedEntry::new(key.as_str(), value.clone()))
        })
        .collect();

    log::debug!("resolved {} of {} requested keys", entries.len(), keys.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> Value {
        json!({
            "id": 1,
            "customer": { "name": "Ada", "tags": ["vip"] },
            "items": [{ "sku": "A1" }]
        })
    }

    #[test]
    fn resolves_top_level_and_nested() {
        let doc = order();
        assert_eq!(resolve(&doc, &KeyPath::parse("id")), Some(&json!(1)));
        assert_eq!(
            resolve(&doc, &KeyPath::parse("customer.name")),
            Some(&json!("Ada"))
        );
        assert_eq!(
            resolve(&doc, &KeyPath::parse("customer")),
            Some(&json!({ "name": "Ada", "tags": ["vip"] }))
        );
    }

    #[test]
    fn missing_key_is_none() {
        let doc = order();
        assert_eq!(resolve(&doc, &KeyPath::parse("customer.missing")), None);
        assert_eq!(resolve(&doc, &KeyPath::parse("nope")), None);
    }

    #[test]
    fn scalar_intermediate_is_none() {
        let doc = order();
        assert_eq!(resolve(&doc, &KeyPath::parse("id.sub")), None);
    }

    #[test]
    fn arrays_are_not_indexed() {
        let doc = order();
        assert_eq!(resolve(&doc, &KeyPath::parse("items.0")), None);
        assert_eq!(resolve(&doc, &KeyPath::parse("items.0.sku")), None);
    }

    #[test]
    fn non_object_root_resolves_nothing() {
        assert_eq!(resolve(&json!([1, 2]), &KeyPath::parse("0")), None);
        assert_eq!(resolve(&Value::Null, &KeyPath::parse("id")), None);
    }

    #[test]
    fn resolve_all_skips_missing_and_keeps_order() {
        let doc = order();
        let keys: Vec<KeyPath> = ["customer.name", "customer.missing", "id"]
            .into_iter()
            .map(KeyPath::parse)
            .collect();
        let entries = resolve_all(&doc, &keys);
        assert_eq!(
            entries,
            [
                ResolvedEntry::new("customer.name", json!("Ada")),
                ResolvedEntry::new("id", json!(1)),
            ]
        );
    }

    #[test]
    fn null_value_still_counts_as_found() {
        let doc = json!({ "note": null });
        assert_eq!(resolve(&doc, &KeyPath::parse("note")), Some(&Value::Null));
    }
}

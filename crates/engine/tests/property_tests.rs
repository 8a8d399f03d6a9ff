use proptest::prelude::*;
use serde_json::{Map, Value};
use textscan_engine::json::{flatten, resolve};
use textscan_engine::words::{Tokenizer, WordFrequencies, rank};
use textscan_shared_kernel::KeyPath;

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('а'..='я').contains(&c) || c == 'ё'
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z ]{0,8}".prop_map(Value::from),
        prop::collection::vec(any::<i32>().prop_map(Value::from), 0..3).prop_map(Value::Array),
    ]
}

fn object_of(values: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{0,5}", values, 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// Always an object at the root, with arbitrary nesting below it. Keys may be
/// empty.
fn document() -> impl Strategy<Value = Value> {
    object_of(leaf().prop_recursive(3, 24, 4, object_of))
}

proptest! {
    #[test]
    fn tokens_are_long_enough_and_well_formed(line in "\\PC{0,200}") {
        let tokenizer = Tokenizer::default();
        for token in tokenizer.tokens(&line) {
            prop_assert!(token.chars().count() >= 4);
            prop_assert!(token.chars().all(is_token_char), "unexpected char in {token:?}");
        }
    }

    #[test]
    fn counting_ignores_case(words in prop::collection::vec("[a-zA-Zа-яА-Я]{4,8}", 1..20)) {
        let tokenizer = Tokenizer::default();
        let upper = words.join(" ").to_uppercase();
        let lower = words.join(" ").to_lowercase();
        let from_upper: WordFrequencies = tokenizer.tokens(&upper).collect();
        let from_lower: WordFrequencies = tokenizer.tokens(&lower).collect();
        prop_assert_eq!(from_upper, from_lower);
    }

    #[test]
    fn ranking_never_exceeds_bounds(
        words in prop::collection::vec("[a-d]{4}", 0..50),
        top_n in 0usize..20,
    ) {
        let frequencies: WordFrequencies = words.into_iter().collect();
        let ranked = rank(&frequencies, top_n);
        prop_assert!(ranked.len() <= top_n);
        prop_assert!(ranked.len() <= frequencies.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn flattened_paths_resolve_to_their_values(doc in document()) {
        for entry in flatten(&doc) {
            let found = resolve(&doc, &KeyPath::parse(&entry.path));
            prop_assert_eq!(found, Some(&entry.value));
        }
    }
}

//! Property-based tests for record deduplication.
//!
//! These tests use proptest to verify invariants that should hold for any
//! input, catching edge cases that hand-picked examples might miss.

use proptest::prelude::*;
use serde_json::Value;

use crate::item::{dedup_items, Item};

/// Small id/path/tag domains so generated vectors contain plenty of collisions.
fn arb_item() -> impl Strategy<Value = Item> {
    (0u64..6, "[ab]{1,2}", proptest::option::of(0i64..3)).prop_map(|(id, path, tag)| {
        let item = Item::new(id, path);
        match tag {
            Some(tag) => item.with_field("tag", Value::from(tag)),
            None => item,
        }
    })
}

proptest! {
    /// Property: no two items in the output are structurally equal
    #[test]
    fn dedup_output_has_no_duplicates(items in proptest::collection::vec(arb_item(), 0..40)) {
        let unique = dedup_items(items);
        for (i, a) in unique.iter().enumerate() {
            for b in &unique[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    /// Property: every input item is represented in the output
    #[test]
    fn dedup_loses_nothing(items in proptest::collection::vec(arb_item(), 0..40)) {
        let unique = dedup_items(items.clone());
        for item in &items {
            prop_assert!(unique.contains(item));
        }
    }

    /// Property: output is the input's first occurrences, in input order
    #[test]
    fn dedup_keeps_first_occurrence_order(items in proptest::collection::vec(arb_item(), 0..40)) {
        let mut expected: Vec<Item> = Vec::new();
        for item in &items {
            if !expected.contains(item) {
                expected.push(item.clone());
            }
        }
        prop_assert_eq!(dedup_items(items), expected);
    }

    /// Property: deduplicating twice changes nothing
    #[test]
    fn dedup_is_idempotent(items in proptest::collection::vec(arb_item(), 0..40)) {
        let once = dedup_items(items);
        let twice = dedup_items(once.clone());
        prop_assert_eq!(once, twice);
    }
}

//! Domain-specific assertions for the tagdeck harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! ordering invariant was violated and *where* in the display order the
//! violation occurred.

use super::builders::oracle_is_match;
use tagdeck::TagManager;

/// Assert the full ranked-ordering invariant for the manager's current
/// display order:
///
/// 1. every entry's match flag agrees with the model predicate;
/// 2. every matching entry precedes every non-matching entry;
/// 3. within each partition, entries ascend by lowercased text.
pub fn assert_ranked_invariant(manager: &TagManager, query: &str) {
    let entries = manager.entries();

    for entry in &entries {
        let expected = oracle_is_match(&entry.name, query);
        assert_eq!(
            entry.matches_query, expected,
            "match flag for {:?} disagrees with the model for query {:?}",
            entry.name, query
        );
    }

    if let Some(boundary) = entries.iter().position(|e| !e.matches_query) {
        if let Some(straggler) = entries[boundary..].iter().find(|e| e.matches_query) {
            panic!(
                "partition violated for query {:?}: matching tag {:?} appears after \
                 non-matching tag {:?}",
                query, straggler.name, entries[boundary].name
            );
        }
    }

    for partition in [true, false] {
        let keys: Vec<String> = entries
            .iter()
            .filter(|e| e.matches_query == partition)
            .map(|e| e.name.to_lowercase())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(
            keys, sorted,
            "partition (matching = {partition}) is not ascending for query {query:?}"
        );
    }
}

/// Assert that the display order contains no duplicates and is a
/// permutation of the raw tag set.
pub fn assert_order_is_permutation(manager: &TagManager) {
    let mut ordered: Vec<String> = manager.ordered().to_vec();
    let mut raw = manager.tags();
    assert_eq!(
        ordered.len(),
        raw.len(),
        "display order and raw set disagree on length"
    );
    ordered.sort();
    raw.sort();
    assert_eq!(ordered, raw, "display order is not a permutation of the set");
}

/// Assert an exact display order.
///
/// ```rust
/// assert_order!(manager, ["bat", "Camera", "cat"]);
/// ```
#[macro_export]
macro_rules! assert_order {
    ($manager:expr, $expected:expr) => {{
        let ordered: Vec<&str> = $manager.ordered().iter().map(String::as_str).collect();
        let expected: Vec<&str> = $expected.to_vec();
        pretty_assertions::assert_eq!(ordered, expected, "display order mismatch");
    }};
}

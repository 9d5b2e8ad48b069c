//! Test builders — managers, corpora, and the model ordering oracle.
//!
//! The oracle reimplements the display-order rule with plain `contains`
//! instead of the production regex path, so harness assertions never share
//! code with the implementation under test.

use tagdeck::TagManager;

/// Manager seeded with `tags` through the batch path.
pub fn manager_with(tags: &[&str]) -> TagManager {
    TagManager::with_tags(tags.iter().copied())
}

/// The five-tag scenario used by the end-to-end ordering tests.
pub fn scenario_tags() -> Vec<&'static str> {
    vec!["cat", "bat", "door", "Camera", "floor"]
}

/// Model match predicate: literal, case-insensitive, anywhere in the tag.
pub fn oracle_is_match(tag: &str, query: &str) -> bool {
    tag.to_lowercase().contains(&query.to_lowercase())
}

/// Model display order: dedup in first-seen order, partition by the oracle
/// predicate, sort each partition by lowercased text, matches first.
pub fn expected_order(tags: &[&str], query: &str) -> Vec<String> {
    let mut unique: Vec<&str> = Vec::new();
    for tag in tags {
        if !tag.is_empty() && !unique.contains(tag) {
            unique.push(tag);
        }
    }
    let (mut hits, mut misses): (Vec<&str>, Vec<&str>) =
        unique.into_iter().partition(|t| oracle_is_match(t, query));
    hits.sort_by_key(|t| t.to_lowercase());
    misses.sort_by_key(|t| t.to_lowercase());
    hits.into_iter()
        .chain(misses)
        .map(str::to_string)
        .collect()
}

/// Synthetic corpus of `n` distinct tags cycling through the alphabet.
pub fn corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let letter = (b'a' + (i % 26) as u8) as char;
            format!("{letter}tag{i:05}")
        })
        .collect()
}

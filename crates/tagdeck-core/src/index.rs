//! Ranked sort index — search-prioritized display order over a [`TagSet`].
//!
//! The ordering rule is a strict weak order: tags matching the current query
//! sort before non-matching tags, and ties inside each partition break by
//! case-insensitive lexicographic comparison of the tag text.
//!
//! Resorting runs in two phases: every match flag is recomputed against the
//! current pattern first, then the order is rebuilt with a pure comparator
//! that reads only the precomputed flags. Match state therefore never
//! depends on how many comparisons a sort implementation happens to make —
//! including the zero comparisons of a 0- or 1-element collection.

use crate::set::TagSet;
use regex::{Regex, RegexBuilder};

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// A literal, case-insensitive "contains" query.
///
/// The query text is escaped before compilation, so regex metacharacters in
/// user input match themselves: `a.b` matches the substring `a.b` and
/// nothing else. An empty query matches every tag. There is no invalid-query
/// state — every string compiles.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    pattern: Regex,
}

impl SearchQuery {
    /// Compile a query from raw input text.
    pub fn new(text: &str) -> Self {
        // Anywhere-in-the-string semantics: wildcards on both sides of the
        // escaped literal, anchored to the full tag text.
        let body = if text.is_empty() {
            ".*".to_string()
        } else {
            format!(".*{}.*", regex::escape(text))
        };
        let pattern = RegexBuilder::new(&format!("^{body}$"))
            .case_insensitive(true)
            .build()
            .expect("escaped literal pattern must compile");
        Self {
            raw: text.to_string(),
            pattern,
        }
    }

    /// The match-everything query.
    pub fn match_all() -> Self {
        Self::new("")
    }

    /// Test a tag's full text against the query.
    pub fn is_match(&self, tag: &str) -> bool {
        self.pattern.is_match(tag)
    }

    /// The raw query text as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn matches_all(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::match_all()
    }
}

// ---------------------------------------------------------------------------
// RankedSortIndex
// ---------------------------------------------------------------------------

/// Derived display order and match-flag maintenance for a [`TagSet`].
///
/// The index never owns the tags; callers pass the set into each operation
/// and the index keeps the set's `matches_query` flags and its own order
/// vector consistent with the current query.
#[derive(Debug, Clone, Default)]
pub struct RankedSortIndex {
    query: SearchQuery,
    order: Vec<String>,
}

impl RankedSortIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and immediately recompute flags and order.
    pub fn set_query(&mut self, set: &mut TagSet, text: &str) {
        self.query = SearchQuery::new(text);
        self.resort(set);
    }

    /// Recompute every match flag, then rebuild the display order.
    ///
    /// Phase 1 runs unconditionally over all entries, so a single-element
    /// set still gets its flag refreshed even though phase 2 performs no
    /// pairwise comparison on it.
    pub fn resort(&mut self, set: &mut TagSet) {
        for entry in set.entries_mut() {
            entry.matches_query = self.query.is_match(&entry.name);
        }

        let mut keyed: Vec<(bool, String, String)> = set
            .iter()
            .map(|e| (e.matches_query, e.name.to_lowercase(), e.name.clone()))
            .collect();
        // Matches first, then ascending case-insensitive text. Stable, so
        // exact lowercase ties keep insertion order.
        keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        self.order = keyed.into_iter().map(|(_, _, name)| name).collect();
    }

    /// Append a newly inserted tag to the display order without resorting.
    ///
    /// Callers inserting a batch defer [`resort`](Self::resort) until the
    /// batch completes; a full resort per insertion turns an O(n log n)
    /// import into O(n² log n). A set that just became a single element has
    /// its flag evaluated directly, since no comparison will ever touch it.
    pub fn add_tag(&mut self, set: &mut TagSet, name: &str) {
        self.order.push(name.to_string());
        if set.len() == 1 {
            let matched = self.query.is_match(name);
            if let Some(entry) = set.entry_mut(name) {
                entry.matches_query = matched;
            }
        }
    }

    /// Drop a tag from the display order in place. The remaining order is
    /// recomputed lazily on the next resort.
    pub fn remove_tag(&mut self, name: &str) {
        self.order.retain(|n| n != name);
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Current display order.
    pub fn ordered_tags(&self) -> &[String] {
        &self.order
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

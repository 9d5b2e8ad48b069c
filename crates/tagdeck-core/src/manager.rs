//! TagManager — coordinator that mediates every add/delete/query operation
//! against a [`TagSet`] + [`RankedSortIndex`] pair.
//!
//! All operations are synchronous and run to completion, so a render pass
//! never observes the set or index mid-mutation. Rejected input is reported
//! through return values ([`SubmitOutcome`], `bool`), never through errors:
//! the manager defines total functions over all string inputs.

use crate::index::RankedSortIndex;
use crate::set::TagSet;
use crate::source::TagSource;
use crate::types::{Mode, Rejection, SubmitOutcome, TagEntry};

/// Tag collection coordinator with an edit/viewer capability gate.
#[derive(Debug, Clone, Default)]
pub struct TagManager {
    set: TagSet,
    index: RankedSortIndex,
    mode: Mode,
}

impl TagManager {
    /// An empty manager in [`Mode::Edit`] with a match-everything query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a manager with an initial tag list (deduplicated, one resort).
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut manager = Self::new();
        manager.add_tags(tags);
        manager
    }

    // -- editing ------------------------------------------------------------

    /// Submit text from the input affordance.
    ///
    /// Non-empty, non-duplicate text is registered and the order resorted;
    /// the returned name doubles as the scroll target for the new chip.
    /// Empty or duplicate input is rejected with the offending text echoed
    /// back. Neither path is an error.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let reason = if text.is_empty() {
            Some(Rejection::Empty)
        } else if self.set.contains(text) {
            Some(Rejection::Duplicate)
        } else {
            None
        };

        if let Some(reason) = reason {
            return SubmitOutcome::Rejected {
                input: text.to_string(),
                reason,
            };
        }

        self.register(text);
        self.index.resort(&mut self.set);
        SubmitOutcome::Added(text.to_string())
    }

    /// Register a single tag and resort. Returns `false` when the tag is an
    /// exact duplicate (or empty); the set is left untouched in that case.
    pub fn add_tag(&mut self, name: &str) -> bool {
        let registered = self.register(name);
        if registered {
            self.index.resort(&mut self.set);
        }
        registered
    }

    /// Register a batch of tags with exactly one resort at the end.
    ///
    /// Resorting after every insertion costs O(n log n) per item on a large
    /// import; deferring it bounds the whole batch to one O(n log n) pass.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.register(tag.as_ref());
        }
        self.index.resort(&mut self.set);
    }

    /// Remove a tag by exact name. Absent names are a no-op; the display
    /// order is pruned in place and fully recomputed on the next resort.
    pub fn delete_tag(&mut self, name: &str) {
        self.set.remove(name);
        self.index.remove_tag(name);
    }

    /// Remove every tag.
    pub fn clear(&mut self) {
        self.set.clear();
        self.index.clear();
    }

    fn register(&mut self, name: &str) -> bool {
        // Tags are non-empty by definition; batch sources may hand us blank
        // lines, which are skipped rather than stored.
        if name.is_empty() || !self.set.add(name) {
            return false;
        }
        self.index.add_tag(&mut self.set, name);
        true
    }

    // -- searching ----------------------------------------------------------

    /// Apply a search query, recomputing match flags and display order.
    ///
    /// Called once per keystroke by the input collaborator; no debouncing is
    /// assumed or required.
    pub fn query(&mut self, text: &str) {
        self.index.set_query(&mut self.set, text);
    }

    /// The raw text of the current query.
    pub fn query_text(&self) -> &str {
        self.index.query().raw()
    }

    // -- reading ------------------------------------------------------------

    /// Tag names in display order (matches first, each partition ascending
    /// case-insensitively).
    pub fn ordered(&self) -> &[String] {
        self.index.ordered_tags()
    }

    /// Entries in display order, with their current match flags.
    pub fn entries(&self) -> Vec<&TagEntry> {
        self.index
            .ordered_tags()
            .iter()
            .filter_map(|name| self.set.get(name))
            .collect()
    }

    /// Raw tag names in insertion order.
    pub fn tags(&self) -> Vec<String> {
        self.set.names()
    }

    /// Exact-match lookup.
    pub fn contains(&self, name: &str) -> bool {
        self.set.contains(name)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    // -- mode ---------------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch between edit and viewer mode. Purely a capability gate: the
    /// set and index are unaffected.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.mode = if editable { Mode::Edit } else { Mode::Viewer };
    }

    pub fn is_editable(&self) -> bool {
        self.mode == Mode::Edit
    }

    // -- collaborator boundary ----------------------------------------------

    /// Replace the current tags with whatever the source lists.
    pub fn load_from(&mut self, source: &dyn TagSource) {
        self.clear();
        self.add_tags(source.list_tags());
    }

    /// Hand the raw tag list to the source. The source is a black box; no
    /// success or failure is reported back.
    pub fn publish_to(&self, source: &mut dyn TagSource) {
        source.publish(&self.tags());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn submit_accepts_new_tag() {
        let mut manager = TagManager::new();
        assert_eq!(manager.submit("dog"), SubmitOutcome::Added("dog".into()));
        assert!(manager.contains("dog"));
    }

    #[test]
    fn submit_rejects_empty_input() {
        let mut manager = TagManager::new();
        assert_eq!(
            manager.submit(""),
            SubmitOutcome::Rejected {
                input: String::new(),
                reason: Rejection::Empty,
            }
        );
        assert!(manager.is_empty());
    }

    #[test]
    fn submit_rejects_duplicate() {
        let mut manager = TagManager::with_tags(["dog"]);
        let outcome = manager.submit("dog");
        assert!(!outcome.is_added());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn add_tag_reports_duplicate_without_error() {
        let mut manager = TagManager::new();
        assert!(manager.add_tag("cat"));
        assert!(!manager.add_tag("cat"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn delete_then_contains_is_false() {
        let mut manager = TagManager::with_tags(["dog", "cat"]);
        manager.delete_tag("dog");
        assert!(!manager.contains("dog"));
        assert_eq!(manager.ordered(), ["cat"]);
    }

    #[test]
    fn mode_gate_leaves_data_untouched() {
        let mut manager = TagManager::with_tags(["dog", "cat"]);
        manager.query("do");
        let before: Vec<String> = manager.ordered().to_vec();

        manager.set_editable(false);
        assert_eq!(manager.mode(), Mode::Viewer);
        assert_eq!(manager.ordered(), before.as_slice());
        assert_eq!(manager.query_text(), "do");
    }

    #[test]
    fn blank_names_are_skipped_on_batch_add() {
        let mut manager = TagManager::new();
        manager.add_tags(["", "dog", ""]);
        assert_eq!(manager.tags(), vec!["dog"]);
    }
}

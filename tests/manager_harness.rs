//! TagManager integration harness.
//!
//! # What this covers
//!
//! - **Submit flow**: non-empty, non-duplicate text is accepted and exposed
//!   as a scroll target; empty and duplicate text is rejected as an ordinary
//!   outcome, never an error.
//! - **Batch insertion**: `add_tags` produces exactly the same final order
//!   as per-item adds, and keeps the order correct with a single deferred
//!   resort.
//! - **Deletion**: removed tags disappear from both `contains` and the
//!   display order; deleting an absent tag is a no-op.
//! - **Mode gate**: viewer mode changes capability only — data, flags, and
//!   order are untouched.
//! - **Source boundary**: publish/refresh round-trips through
//!   [`MemoryStore`], including dedup of the demo list's duplicate entry.
//! - **Keystroke tolerance**: a query per keystroke leaves the manager in
//!   the same state as a single query with the final text.
//!
//! # Running
//!
//! ```sh
//! cargo test --test manager_harness
//! ```

mod common;
use common::*;
use tagdeck::{source::DEMO_TAGS, MemoryStore, Rejection, SubmitOutcome, TagManager, TagSource};

// ---------------------------------------------------------------------------
// Submit flow
// ---------------------------------------------------------------------------

#[test]
fn submit_adds_and_names_the_scroll_target() {
    let mut manager = manager_with(&["cat"]);
    let outcome = manager.submit("bat");
    assert_eq!(outcome, SubmitOutcome::Added("bat".to_string()));
    assert_order!(manager, ["bat", "cat"]);
}

#[test]
fn submit_empty_is_rejected_observably() {
    let mut manager = manager_with(&["cat"]);
    assert_eq!(
        manager.submit(""),
        SubmitOutcome::Rejected {
            input: String::new(),
            reason: Rejection::Empty,
        }
    );
    assert_eq!(manager.len(), 1);
}

#[test]
fn submit_duplicate_is_rejected_observably() {
    let mut manager = manager_with(&["cat"]);
    assert_eq!(
        manager.submit("cat"),
        SubmitOutcome::Rejected {
            input: "cat".to_string(),
            reason: Rejection::Duplicate,
        }
    );
    assert_eq!(manager.len(), 1);
}

#[test]
fn rapid_sequential_submits_register_once() {
    // One input event is processed fully before the next is dispatched, so
    // a repeated submit of the same text must hit the duplicate path.
    let mut manager = TagManager::new();
    assert!(manager.submit("dog").is_added());
    assert!(!manager.submit("dog").is_added());
    assert!(!manager.submit("dog").is_added());
    assert_eq!(manager.len(), 1);
}

// ---------------------------------------------------------------------------
// Batch insertion
// ---------------------------------------------------------------------------

#[test]
fn batch_add_matches_per_item_adds() {
    let tags = ["zebra", "Apple", "mango", "apple", "Zebra"];

    let mut batched = TagManager::new();
    batched.add_tags(tags);

    let mut one_by_one = TagManager::new();
    for tag in tags {
        one_by_one.add_tag(tag);
    }

    assert_eq!(batched.ordered(), one_by_one.ordered());
}

#[test]
fn batch_add_is_sorted_after_the_batch() {
    let mut manager = TagManager::new();
    manager.add_tags(scenario_tags());
    assert_order!(manager, ["bat", "Camera", "cat", "door", "floor"]);
}

#[test]
fn add_tag_reports_duplicates_as_false() {
    let mut manager = TagManager::new();
    assert!(manager.add_tag("dog"));
    assert!(!manager.add_tag("dog"));
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[test]
fn deleted_tag_leaves_contains_and_order() {
    let mut manager = manager_with(&["cat"]);
    manager.add_tag("dog");
    assert!(manager.contains("dog"));

    manager.delete_tag("dog");
    assert!(!manager.contains("dog"));
    assert_order!(manager, ["cat"]);
}

#[test]
fn delete_absent_is_a_noop() {
    let mut manager = manager_with(&["cat"]);
    manager.delete_tag("ghost");
    assert_eq!(manager.len(), 1);
}

#[test]
fn order_stays_consistent_after_delete_and_requery() {
    let mut manager = manager_with(&scenario_tags());
    manager.query("a");
    manager.delete_tag("Camera");
    manager.query("a");
    assert_ranked_invariant(&manager, "a");
    assert_order!(manager, ["bat", "cat", "door", "floor"]);
}

// ---------------------------------------------------------------------------
// Mode gate
// ---------------------------------------------------------------------------

#[test]
fn viewer_mode_changes_no_data() {
    let mut manager = manager_with(&scenario_tags());
    manager.query("ca");
    let order_before: Vec<String> = manager.ordered().to_vec();
    let flags_before: Vec<bool> = manager.entries().iter().map(|e| e.matches_query).collect();

    manager.set_editable(false);
    assert!(!manager.is_editable());
    assert_eq!(manager.ordered(), order_before.as_slice());
    let flags_after: Vec<bool> = manager.entries().iter().map(|e| e.matches_query).collect();
    assert_eq!(flags_after, flags_before);

    manager.set_editable(true);
    assert!(manager.is_editable());
}

// ---------------------------------------------------------------------------
// Source boundary
// ---------------------------------------------------------------------------

#[test]
fn demo_seed_drops_the_duplicate_dog() {
    let store = MemoryStore::demo();
    let manager = TagManager::with_tags(store.list_tags());
    assert_eq!(manager.len(), DEMO_TAGS.len() - 1);
    assert!(manager.contains("dog"));
}

#[test]
fn publish_then_refresh_round_trips() {
    let mut store = MemoryStore::new();
    let mut manager = manager_with(&["cat", "bat"]);
    manager.publish_to(&mut store);

    let mut reloaded = TagManager::new();
    reloaded.load_from(&store);
    assert_eq!(reloaded.tags(), vec!["cat", "bat"]);
}

#[test]
fn refresh_replaces_previous_contents() {
    let store = MemoryStore::with_tags(["fresh"]);
    let mut manager = manager_with(&["stale", "older"]);
    manager.load_from(&store);
    assert_order!(manager, ["fresh"]);
}

// ---------------------------------------------------------------------------
// Keystroke tolerance
// ---------------------------------------------------------------------------

#[test]
fn query_per_keystroke_equals_final_query() {
    let mut typed = manager_with(&scenario_tags());
    for prefix in ["c", "ca", "cam"] {
        typed.query(prefix);
    }

    let mut direct = manager_with(&scenario_tags());
    direct.query("cam");

    assert_eq!(typed.ordered(), direct.ordered());
    assert_eq!(typed.query_text(), "cam");
    assert_ranked_invariant(&typed, "cam");
}

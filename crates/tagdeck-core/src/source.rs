//! Tag source boundary — where seeded tag lists come from and where edited
//! lists are published back to.
//!
//! The core treats a source as a black box: `list_tags` seeds the manager,
//! `publish` hands the edited list back, and no success or failure is
//! validated in either direction.

/// A collaborator that supplies and accepts raw tag lists.
pub trait TagSource {
    /// All tags currently known to the source.
    fn list_tags(&self) -> Vec<String>;
    /// Replace the source's tags with the given list.
    fn publish(&mut self, tags: &[String]);
}

/// Demo tag list used by the TUI and the harnesses.
///
/// Intentionally messy: mixed case, digit-leading names, underscores, and
/// one exact duplicate (`dog`) that the manager is expected to drop.
pub const DEMO_TAGS: &[&str] = &[
    "000", "cat", "bat", "door", "Camera", "floor", "001", "car", "train",
    "file", "canary", "zebra", "dog", "cycle", "farm", "100", "101", "201",
    "111", "010", "Zoo", "Cobra", "metal_camera", "test_001", "my_dog",
    "Apple", "dog", "egg", "grass", "haze", "ink", "joke", "kale", "loop",
    "most", "nose", "opal", "price", "queen", "rake", "steer", "team",
    "umbrella", "vase", "wax", "xylophone", "yield",
];

/// In-memory [`TagSource`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tags: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with [`DEMO_TAGS`].
    pub fn demo() -> Self {
        Self::with_tags(DEMO_TAGS.iter().copied())
    }

    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl TagSource for MemoryStore {
    fn list_tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn publish(&mut self, tags: &[String]) {
        self.tags = tags.to_vec();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_replaces_listing() {
        let mut store = MemoryStore::demo();
        let edited = vec!["only".to_string()];
        store.publish(&edited);
        assert_eq!(store.list_tags(), edited);
    }

    #[test]
    fn demo_list_contains_its_known_duplicate() {
        let dogs = DEMO_TAGS.iter().filter(|t| **t == "dog").count();
        assert_eq!(dogs, 2);
    }
}

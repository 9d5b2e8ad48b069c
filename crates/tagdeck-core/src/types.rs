//! Core types shared across tagdeck layers: the per-tag record, the
//! manager's mode, and the observable outcomes of a submit.

/// A tag tracked by a [`TagSet`](crate::TagSet), with its derived match flag.
///
/// `matches_query` always reflects the most recently applied search query —
/// it is recomputed by the index, never set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// The tag text, stored exactly as entered (case-sensitive).
    pub name: String,
    /// Whether the tag satisfies the current search query.
    pub matches_query: bool,
}

impl TagEntry {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matches_query: false,
        }
    }
}

/// Capability mode of a [`TagManager`](crate::TagManager).
///
/// The mode gates presentation affordances only (input visibility, delete
/// buttons); the underlying tag set and index are unaffected by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Tags can be added and deleted.
    #[default]
    Edit,
    /// Read-only presentation.
    Viewer,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Edit => write!(f, "edit"),
            Mode::Viewer => write!(f, "viewer"),
        }
    }
}

/// Result of [`TagManager::submit`](crate::TagManager::submit).
///
/// Both variants are ordinary observable outcomes — rejected input is not an
/// error and never panics or propagates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The tag was registered. Carries the tag name so the rendering surface
    /// can scroll the new chip into view.
    Added(String),
    /// The input was rejected; the original text is echoed back for
    /// user-facing feedback.
    Rejected { input: String, reason: Rejection },
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }
}

/// Why a submit was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty input.
    Empty,
    /// An exactly-equal tag already exists.
    Duplicate,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty tag"),
            Rejection::Duplicate => write!(f, "tag already exists"),
        }
    }
}

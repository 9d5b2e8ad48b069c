//! tagdeck-core — tag collection, ranked search index, and chip presentation.
//!
//! This crate holds everything that is independent of the rendering surface:
//! the unique tag collection, the search-prioritized display order, the
//! coordinator that mediates add/delete/query, and the deterministic color
//! rules used to paint chips.
//!
//! # Architecture
//!
//! ```text
//! input events ──► TagManager ──► TagSet (insertion order, match flags)
//!                      │
//!                      └────────► RankedSortIndex (display order)
//!
//! render pass  ──► ordered entries + color::render_state per chip
//! ```
//!
//! Everything here is synchronous and single-threaded: each mutation runs to
//! completion before any render query observes the state.

pub mod chip;
pub mod color;
pub mod config;
pub mod index;
pub mod manager;
pub mod set;
pub mod source;
pub mod types;

pub use index::{RankedSortIndex, SearchQuery};
pub use manager::TagManager;
pub use set::TagSet;
pub use source::{MemoryStore, TagSource};
pub use types::{Mode, Rejection, SubmitOutcome, TagEntry};

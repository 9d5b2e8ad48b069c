//! tagdeck — terminal tag chips.
//!
//! A tag manager split into an algorithmic core and a TUI shell. This facade
//! re-exports the core so integration harnesses and benches can import
//! everything through the `tagdeck` crate.
//!
//! # Architecture
//!
//! ```text
//! input bar ──► TagManager ──► TagSet + RankedSortIndex
//!                   │
//! chip board ◄──────┴── ordered entries + color::render_state
//! ```
//!
//! All mutation is synchronous and single-threaded: one input event is
//! processed to completion before the next is dispatched.

pub use tagdeck_core::{
    chip, color, config, index, manager, set, source, types, MemoryStore, Mode, RankedSortIndex,
    Rejection, SearchQuery, SubmitOutcome, TagEntry, TagManager, TagSet, TagSource,
};

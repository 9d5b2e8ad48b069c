#![allow(unused)]
//! Shared helpers for the tagdeck integration harnesses.
//!
//! `builders` constructs managers and corpora; `assertions` checks the
//! ranked-ordering invariant against an independent model implementation.

pub mod assertions;
pub mod builders;

pub use assertions::*;
pub use builders::*;

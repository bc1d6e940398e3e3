//! Layer cache metadata
//!
//! Each cached application layer carries a [`LayerMetadata`] entry naming
//! the source files it was built from and the instant it was built. The
//! cache container compares these against the current file state to decide
//! whether a layer can be reused.
//!
//! # Entry Invariants
//!
//! | Field | Rule |
//! |-------|------|
//! | `source_files` | Never empty, order and duplicates kept as given |
//! | `last_modified_time` | Set once at construction, never updated |
//!
//! A rebuilt layer gets a new entry; entries are not mutated in place.

pub mod layer_metadata;

pub use layer_metadata::{source_file_strings, LayerMetadata};

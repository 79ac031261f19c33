//! Collections provided by `tally`.
//!
//! Collections are organized by data structure type:
//! - `hash`: Hash-based collections

pub mod hash;

pub use hash::{CountedSet, CountedSetError, Removal};

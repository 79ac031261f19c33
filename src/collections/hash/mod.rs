//! Hash-based collections.
//!
//! Elements must implement `Eq + Hash`; iteration order follows the backing
//! hash map and is unspecified.

pub mod counted_set;

pub use counted_set::{CountedSet, CountedSetError, Removal};

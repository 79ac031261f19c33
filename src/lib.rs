//! # `tally` - Counted Sets
//!
//! A hash-based counted set (multiset) with set-style ergonomics. Each
//! distinct element carries an occurrence count; membership and the set
//! algebra predicates consider only which elements are present, while
//! mutation adjusts counts.
//!
//! ## Key Features
//!
//! - **Exact counts**: `add` increments, `remove` decrements, and an element
//!   whose count reaches zero is dropped rather than kept at zero.
//! - **Two removal modes**: [`Removal::Decrement`] undoes one occurrence,
//!   [`Removal::Entirely`] erases the element whatever its count.
//! - **Set algebra**: subset, superset, intersection tests plus in-place and
//!   copying union, intersection and difference.
//! - **Capacity merge**: raise counts to the pointwise maximum of two sets.
//! - **Value semantics**: `Clone` produces an independent copy.
//!
//! ## Invariants
//!
//! 1. Every stored count is at least one; counts are stored as
//!    [`NonZeroUsize`](core::num::NonZeroUsize).
//! 2. `len()` is the number of distinct elements, not the sum of counts.
//!
//! ## Cargo features
//!
//! - `tracing`: trace events for structural mutations.
//! - `parallel`: `par_iter()` over distinct elements via `rayon`.
//! - `proptest`: `strategy::counted_set` for property tests.
//!
//! ## Example
//!
//! ```rust
//! use tally::{counted_set, CountedSet};
//!
//! let vowels = counted_set!['a', 'e', 'i', 'o', 'u'];
//! let alphabet: CountedSet<char> = ('a'..='z').collect();
//! assert!(vowels.is_subset(&alphabet));
//!
//! let mut bag = vowels.clone();
//! bag += 'a';
//! assert_eq!(bag.len(), 5);
//! assert_eq!(bag.count_of(&'a'), 2);
//!
//! bag.remove(&'a');
//! assert_eq!(bag, vowels);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;

pub use collections::hash::counted_set;
pub use collections::{CountedSet, CountedSetError, Removal};


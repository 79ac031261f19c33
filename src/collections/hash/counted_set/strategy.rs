//! Proptest strategies for `CountedSet`.
//!
//! Enabled by the `proptest` feature so downstream crates can property-test
//! code that consumes counted sets.

use core::fmt::Debug;
use core::hash::Hash;

use proptest::collection::{vec, SizeRange};
use proptest::strategy::Strategy;

use super::CountedSet;

/// Generates sets by adding `size` draws from `element`.
///
/// Duplicate draws raise counts, so small element domains produce counts
/// above one.
pub fn counted_set<T, E>(
    element: E,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = CountedSet<T>>
where
    T: Eq + Hash + Debug,
    E: Strategy<Value = T>,
{
    vec(element, size).prop_map(|values| values.into_iter().collect::<CountedSet<T>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn generated_totals_match_draws(set in counted_set(0u8..4, 0..32)) {
            prop_assert!(set.len() <= 4);
            prop_assert!(set.total() < 32);
            prop_assert_eq!(set.expanded().count(), set.total());
        }
    }
}

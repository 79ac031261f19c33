//! `CountedSet`: a hash set that remembers how many times each element was added.
//!
//! The container is a multiset with set ergonomics: membership, subset and
//! intersection tests look only at the *distinct* elements, while every
//! element carries an occurrence count that `add` increments and `remove`
//! decrements.
//!
//! Storage is a single `HashMap<T, NonZeroUsize>`. An element whose count
//! would drop to zero is removed from the map, so the zero boundary is part
//! of the type rather than a runtime check scattered through the code.
//!
//! Two removal modes exist and callers pick one explicitly:
//! - [`Removal::Decrement`] undoes a single occurrence;
//! - [`Removal::Entirely`] erases the element regardless of its count.
//!
//! `len()` reports the number of distinct elements, not the number of
//! occurrences; use [`CountedSet::total`] for the latter.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;

use crate::macros::trace_op;

mod algebra;
mod error;
mod iter;
mod ops;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::CountedSetError;
pub use iter::{Counts, Expanded, IntoIter, Iter};

const ONE: NonZeroUsize = NonZeroUsize::MIN;

/// How a removal treats an element that was added more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Removal {
    /// Remove one occurrence; the element disappears once its count reaches zero.
    #[default]
    Decrement,
    /// Remove the element and all of its occurrences at once.
    Entirely,
}

/// A hash-based counted set (multiset).
///
/// # Examples
///
/// ```rust
/// use tally::CountedSet;
///
/// let mut letters = CountedSet::new();
/// letters.add('a');
/// letters.add('a');
/// letters.add('b');
///
/// assert_eq!(letters.len(), 2);
/// assert_eq!(letters.count_of(&'a'), 2);
///
/// assert_eq!(letters.remove(&'a'), Some(2));
/// assert_eq!(letters.count_of(&'a'), 1);
/// assert_eq!(letters.remove_entirely(&'b'), Some(1));
/// assert!(!letters.contains(&'b'));
/// ```
pub struct CountedSet<T, S = RandomState> {
    contents: HashMap<T, NonZeroUsize, S>,
}

impl<T> CountedSet<T, RandomState> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            contents: HashMap::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` distinct elements.
    ///
    /// The capacity is only a hint; adding more elements still works.
    pub fn with_capacity(capacity: usize) -> Self {
        trace_op!(capacity, "counted set pre-sized");
        Self {
            contents: HashMap::with_capacity(capacity),
        }
    }
}

impl<T, S> CountedSet<T, S> {
    /// Creates an empty set which will use `hasher` to hash elements.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            contents: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with the given capacity hint and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            contents: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Sum of all occurrence counts, i.e. the length of [`expanded`](Self::expanded).
    ///
    /// Saturates at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.contents
            .values()
            .fold(0usize, |acc, count| acc.saturating_add(count.get()))
    }

    /// Number of distinct elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.contents.capacity()
    }

    /// The set's hasher.
    pub fn hasher(&self) -> &S {
        self.contents.hasher()
    }

    /// Returns an arbitrary element, or `None` if the set is empty.
    ///
    /// The choice is stable for a given internal state but otherwise unspecified.
    pub fn any(&self) -> Option<&T> {
        self.contents.keys().next()
    }

    /// Snapshot of the distinct elements in unspecified order.
    pub fn elements(&self) -> Vec<&T> {
        self.contents.keys().collect()
    }

    /// Iterates over the distinct elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.contents.keys())
    }

    /// Iterates over `(element, count)` pairs.
    pub fn iter_counts(&self) -> Counts<'_, T> {
        Counts::new(self.contents.iter())
    }

    /// Iterates over every occurrence: each element is yielded `count` times,
    /// grouped together.
    ///
    /// The size hint is exact unless the total number of occurrences exceeds
    /// `usize::MAX`, in which case it has no upper bound.
    ///
    /// ```rust
    /// use tally::counted_set;
    ///
    /// let set = counted_set!['a', 'a', 'a', 'b', 'b', 'c'];
    /// let flat: Vec<_> = set.expanded().collect();
    /// assert_eq!(flat.len(), 6);
    /// assert_eq!(flat.iter().filter(|c| ***c == 'a').count(), 3);
    /// ```
    pub fn expanded(&self) -> Expanded<'_, T> {
        let total = self
            .contents
            .values()
            .try_fold(0usize, |acc, count| acc.checked_add(count.get()));
        Expanded::new(self.contents.iter(), total)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        trace_op!(distinct = self.contents.len(), "counted set cleared");
        self.contents.clear();
    }

    /// Folds over the distinct elements; `combine` runs once per element,
    /// not once per occurrence.
    pub fn fold<B, F>(&self, initial: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.contents.keys().fold(initial, combine)
    }
}

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Builds a set from explicit `(element, count)` pairs.
    ///
    /// Repeated elements accumulate their counts.
    ///
    /// # Errors
    ///
    /// Returns [`CountedSetError::ZeroCount`] if any pair carries a count of
    /// zero, and [`CountedSetError::CountOverflow`] if an accumulated count
    /// exceeds `usize::MAX`.
    pub fn try_from_counts<I>(counts: I) -> Result<Self, CountedSetError>
    where
        I: IntoIterator<Item = (T, usize)>,
        S: Default,
    {
        let counts = counts.into_iter();
        let (lower, _) = counts.size_hint();
        let mut set = Self::with_capacity_and_hasher(lower, S::default());

        for (value, count) in counts {
            let Some(count) = NonZeroUsize::new(count) else {
                trace_op!(distinct = set.len(), "rejected zero count");
                return Err(CountedSetError::ZeroCount);
            };
            match set.contents.entry(value) {
                Entry::Occupied(mut entry) => {
                    let merged = entry
                        .get()
                        .checked_add(count.get())
                        .ok_or(CountedSetError::CountOverflow)?;
                    entry.insert(merged);
                }
                Entry::Vacant(entry) => {
                    entry.insert(count);
                }
            }
        }

        Ok(set)
    }

    /// Returns `true` if `value` occurs at least once.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.contents.contains_key(value)
    }

    /// Number of times `value` occurs, `0` if absent.
    #[inline]
    pub fn count_of<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.contents.get(value).map_or(0, |count| count.get())
    }

    /// Adds one occurrence of `value`.
    ///
    /// Counts saturate at `usize::MAX`.
    pub fn add(&mut self, value: T) {
        let inserted = match self.contents.entry(value) {
            Entry::Occupied(mut entry) => {
                let count = entry.get_mut();
                *count = count.saturating_add(1);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(ONE);
                true
            }
        };
        if inserted {
            trace_op!(distinct = self.contents.len(), "new element added");
        }
    }

    /// Adds one occurrence of each value, in order.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.reserve(lower);

        for value in values {
            self.add(value);
        }
    }

    /// Adds one occurrence of a borrowed value, cloning it only when it is new.
    fn add_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        if let Some(count) = self.contents.get_mut(value) {
            *count = count.saturating_add(1);
        } else {
            self.contents.insert(value.clone(), ONE);
            trace_op!(distinct = self.contents.len(), "new element added");
        }
    }

    /// Removes one occurrence of `value`.
    ///
    /// Returns the count held *before* the call. `None` means `value` was not
    /// present and nothing changed. The element itself is not handed back;
    /// use [`take`](Self::take) to remove it entirely and get it back.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.remove_with(value, Removal::Decrement)
    }

    /// Removes `value` and all of its occurrences.
    ///
    /// Returns the count held before the call, or `None` if `value` was absent.
    pub fn remove_entirely<Q>(&mut self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.remove_with(value, Removal::Entirely)
    }

    /// Removes `value` according to `removal`.
    ///
    /// Returns the previous count, or `None` if `value` was absent. See
    /// [`take`](Self::take) for getting the stored element back.
    pub fn remove_with<Q>(&mut self, value: &Q, removal: Removal) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let count = self.contents.get_mut(value)?;
        let previous = count.get();

        match (removal, NonZeroUsize::new(previous - 1)) {
            (Removal::Decrement, Some(decremented)) => *count = decremented,
            _ => {
                self.contents.remove(value);
                trace_op!(distinct = self.contents.len(), previous, "element removed");
            }
        }

        Some(previous)
    }

    /// Removes `value` entirely and hands back the stored element.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let (element, _) = self.contents.remove_entry(value)?;
        trace_op!(distinct = self.contents.len(), "element taken");
        Some(element)
    }

    /// Raises the count of every element of `other` to
    /// `max(self.count_of(x), other.count_of(x))`.
    ///
    /// Counts never decrease, and elements found only in `self` are left alone.
    /// Unlike [`union_with`](Self::union_with), counts are not added together.
    ///
    /// ```rust
    /// use tally::counted_set;
    ///
    /// let mut stock = counted_set!['A', 'A', 'A', 'B', 'B', 'C'];
    /// let order = counted_set!['A', 'B', 'B', 'B', 'B', 'B', 'D'];
    /// stock.capacity_merge(&order);
    ///
    /// assert_eq!(stock.count_of(&'A'), 3);
    /// assert_eq!(stock.count_of(&'B'), 5);
    /// assert_eq!(stock.count_of(&'C'), 1);
    /// assert_eq!(stock.count_of(&'D'), 1);
    /// ```
    pub fn capacity_merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (value, &theirs) in &other.contents {
            match self.contents.get_mut(value) {
                Some(ours) => *ours = (*ours).max(theirs),
                None => {
                    self.contents.insert(value.clone(), theirs);
                }
            }
        }
        trace_op!(distinct = self.contents.len(), merged = other.len(), "capacity merge");
    }

    /// Reserves room for at least `additional` more distinct elements.
    pub fn reserve(&mut self, additional: usize) {
        self.contents.reserve(additional);
    }

    /// Shrinks the backing storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.contents.shrink_to_fit();
    }

    /// Returns a new set holding the distinct elements for which `predicate`
    /// holds, each with a count of one.
    ///
    /// Original multiplicities are not carried over.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        S: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut filtered = Self::with_hasher(self.contents.hasher().clone());
        for value in self.contents.keys().filter(|value| predicate(value)) {
            filtered.add(value.clone());
        }
        filtered
    }

    /// Returns a new set built by adding `transform(x)` once per distinct `x`.
    ///
    /// Distinct elements that map to the same value accumulate, so two of them
    /// produce a count of two.
    pub fn map<U, F>(&self, transform: F) -> CountedSet<U, S>
    where
        U: Eq + Hash,
        S: Clone,
        F: FnMut(&T) -> U,
    {
        let mut mapped =
            CountedSet::with_capacity_and_hasher(self.len(), self.contents.hasher().clone());
        mapped.add_all(self.contents.keys().map(transform));
        mapped
    }
}

#[cfg(feature = "parallel")]
impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash + Sync,
    S: BuildHasher + Sync,
{
    /// Parallel iterator over the distinct elements.
    pub fn par_iter(&self) -> impl rayon::iter::ParallelIterator<Item = &T> + '_ {
        use rayon::prelude::*;

        self.contents.par_iter().map(|(value, _)| value)
    }
}

impl<T, S> Clone for CountedSet<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            contents: self.contents.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.contents.clone_from(&source.contents);
    }
}

impl<T, S> Default for CountedSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> fmt::Debug for CountedSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CountedSet(")?;
        f.debug_map().entries(self.iter_counts()).finish()?;
        f.write_str(")")
    }
}

impl<T, S> FromIterator<T> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.add_all(iter);
        set
    }
}

impl<T, S> Extend<T> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for CountedSet<T, S>
where
    T: 'a + Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.add_cloned(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for CountedSet<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for CountedSet<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

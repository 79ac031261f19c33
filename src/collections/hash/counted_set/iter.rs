//! Iterators over a `CountedSet`.
//!
//! Every iterator here walks a borrowed snapshot of the backing map; the
//! borrow checker rules out mutation while one is alive. Iteration order is
//! the hash map's and is not specified.

use core::fmt;
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use std::collections::hash_map;

use super::CountedSet;

/// Iterator over the distinct elements of a [`CountedSet`].
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, NonZeroUsize>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(inner: hash_map::Keys<'a, T, NonZeroUsize>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

// Manual impl: cloning the iterator must not require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over `(element, count)` pairs of a [`CountedSet`].
pub struct Counts<'a, T> {
    inner: hash_map::Iter<'a, T, NonZeroUsize>,
}

impl<'a, T> Counts<'a, T> {
    pub(super) fn new(inner: hash_map::Iter<'a, T, NonZeroUsize>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Counts<'a, T> {
    type Item = (&'a T, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, count)| (value, count.get()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Counts<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Counts<'_, T> {}

impl<T> Clone for Counts<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Iterator yielding every element once per occurrence.
///
/// Occurrences of the same element are yielded back to back.
pub struct Expanded<'a, T> {
    inner: hash_map::Iter<'a, T, NonZeroUsize>,
    current: Option<&'a T>,
    pending: usize,
    // `None` once the total occurrence count does not fit in `usize`.
    remaining: Option<usize>,
}

impl<'a, T> Expanded<'a, T> {
    pub(super) fn new(inner: hash_map::Iter<'a, T, NonZeroUsize>, total: Option<usize>) -> Self {
        Self {
            inner,
            current: None,
            pending: 0,
            remaining: total,
        }
    }
}

impl<'a, T> Iterator for Expanded<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending == 0 {
            let (value, count) = self.inner.next()?;
            self.current = Some(value);
            self.pending = count.get();
        }
        self.pending -= 1;
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        self.current
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Expanded<'_, T> {}

impl<T> Clone for Expanded<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            current: self.current,
            pending: self.pending,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over the distinct elements of a [`CountedSet`].
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, NonZeroUsize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T, S> IntoIterator for &'a CountedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for CountedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the set, yielding each distinct element once.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.contents.into_keys(),
        }
    }
}

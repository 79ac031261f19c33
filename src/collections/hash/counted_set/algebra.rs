//! Set algebra over `CountedSet`.
//!
//! Predicates (`intersects`, `is_subset`, `is_superset`) look only at which
//! elements are present. The mutating operations walk the *distinct*
//! elements of the other operand, so each shared element is touched once no
//! matter how many times `other` holds it.

use core::hash::{BuildHasher, Hash};

use super::{CountedSet, Removal, ONE};
use crate::macros::trace_op;

impl<T, S> CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if both sets hold the same elements with the same counts.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.contents == other.contents
    }

    /// Returns `true` if the sets share at least one element.
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|value| large.contains(value))
    }

    /// Returns `true` if the sets share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.intersects(other)
    }

    /// Returns `true` if every element of `self` is in `other`. Counts are ignored.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if every element of `other` is in `self`. Counts are ignored.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Adds one occurrence of every distinct element of `other`.
    ///
    /// `other`'s counts do not scale the increment: an element stored three
    /// times in `other` still gains exactly one occurrence here.
    pub fn union_with(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.reserve(other.len());
        for value in other {
            self.add_cloned(value);
        }
    }

    /// Removes one occurrence of every distinct element of `other`.
    pub fn subtract(&mut self, other: &Self) {
        self.subtract_with(other, Removal::Decrement);
    }

    /// Applies `removal` once for every distinct element of `other`.
    pub fn subtract_with(&mut self, other: &Self, removal: Removal) {
        for value in other {
            self.remove_with(value, removal);
        }
    }

    /// Keeps only elements also present in `other`.
    ///
    /// Survivors are reset to a count of one, the same outcome as
    /// `self.filter(|x| other.contains(x))`.
    pub fn intersect_with(&mut self, other: &Self) {
        self.contents.retain(|value, count| {
            let keep = other.contents.contains_key(value);
            if keep {
                *count = ONE;
            }
            keep
        });
        trace_op!(distinct = self.contents.len(), "intersected");
    }

    /// Returns a copy of `self` with every distinct element of `other` added once.
    ///
    /// Counts start from `self`'s, so `a.union(&b)` and `b.union(&a)` hold the
    /// same elements but may differ in counts.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
        S: Clone,
    {
        let mut union = self.clone();
        union.union_with(other);
        union
    }

    /// Returns the elements present in both sets, each with a count of one.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
        S: Clone,
    {
        self.filter(|value| other.contains(value))
    }

    /// Returns a copy of `self` with one occurrence of each element of `other` removed.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
        S: Clone,
    {
        let mut difference = self.clone();
        difference.subtract(other);
        difference
    }
}

impl<T, S> PartialEq for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T, S> Eq for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

//! Operator sugar for `CountedSet`.
//!
//! - `set += value` adds one occurrence.
//! - `set += &other` / `set += other` is [`CountedSet::union_with`].
//! - `&a + &b` / `a + b` is [`CountedSet::union`].
//! - `&a - &b` is [`CountedSet::difference`], `&a & &b` is [`CountedSet::intersection`].

use core::hash::{BuildHasher, Hash};
use core::ops::{Add, AddAssign, BitAnd, Sub};

use super::CountedSet;

impl<T, S> AddAssign<T> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn add_assign(&mut self, value: T) {
        self.add(value);
    }
}

impl<T, S> AddAssign<&CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn add_assign(&mut self, other: &CountedSet<T, S>) {
        self.union_with(other);
    }
}

impl<T, S> AddAssign<CountedSet<T, S>> for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Consumes `other`; its distinct elements move in without cloning.
    fn add_assign(&mut self, other: CountedSet<T, S>) {
        self.add_all(other);
    }
}

impl<T, S> Add<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    fn add(self, other: &CountedSet<T, S>) -> Self::Output {
        self.union(other)
    }
}

impl<T, S> Add for CountedSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Output = CountedSet<T, S>;

    fn add(mut self, other: CountedSet<T, S>) -> Self::Output {
        self += other;
        self
    }
}

impl<T, S> Sub<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    fn sub(self, other: &CountedSet<T, S>) -> Self::Output {
        self.difference(other)
    }
}

impl<T, S> BitAnd<&CountedSet<T, S>> for &CountedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Output = CountedSet<T, S>;

    fn bitand(self, other: &CountedSet<T, S>) -> Self::Output {
        self.intersection(other)
    }
}

/// Builds a [`CountedSet`](crate::CountedSet) from a list of elements.
///
/// Each listed element adds one occurrence, so repeats raise counts.
///
/// # Example
///
/// ```rust
/// use tally::counted_set;
///
/// let vowels = counted_set!['a', 'e', 'i', 'o', 'u', 'a'];
/// assert_eq!(vowels.len(), 5);
/// assert_eq!(vowels.count_of(&'a'), 2);
///
/// let empty: tally::CountedSet<u32> = counted_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! counted_set {
    () => {
        $crate::CountedSet::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::CountedSet::from([$($value),+])
    };
}

/// Emits a `tracing` trace event when the `tracing` feature is on; expands
/// to nothing otherwise.
macro_rules! trace_op {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    };
}

pub(crate) use trace_op;

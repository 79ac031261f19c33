use core::fmt;

/// The error type for building a [`CountedSet`](super::CountedSet) from explicit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedSetError {
    /// A count of zero was supplied; stored counts are always at least one.
    ZeroCount,
    /// Accumulated counts for one element exceeded `usize::MAX`.
    CountOverflow,
}

impl fmt::Display for CountedSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount => f.write_str("element count must be at least one"),
            Self::CountOverflow => f.write_str("element count overflowed usize"),
        }
    }
}

impl std::error::Error for CountedSetError {}

//! Error types for sorted collections.

/// Represents the failure modes of [`SortedSet`](super::SortedSet) operations.
///
/// # Examples
///
/// ```rust
/// use sortedset::persistent::{SortedSet, SortedSetError};
///
/// let set = SortedSet::from([10, 20]);
/// assert_eq!(set.index_of(&15), Err(SortedSetError::NotFound));
/// assert_eq!(
///     set.try_get(2),
///     Err(SortedSetError::IndexOutOfRange { index: 2, length: 2 })
/// );
/// assert_eq!(
///     format!("{}", SortedSetError::IndexOutOfRange { index: 2, length: 2 }),
///     "index 2 out of range for sorted set of length 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortedSetError {
    /// The requested element is not a member of the set.
    NotFound,
    /// A positional access fell outside `0..length`.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of elements in the set.
        length: usize,
    },
    /// Two input elements could not be ordered relative to each other.
    Incomparable,
}

impl std::fmt::Display for SortedSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "element not found in sorted set"),
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index {index} out of range for sorted set of length {length}"
            ),
            Self::Incomparable => write!(
                formatter,
                "elements are not mutually comparable and cannot be sorted"
            ),
        }
    }
}

impl std::error::Error for SortedSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(SortedSetError::NotFound, "element not found in sorted set")]
    #[case::out_of_range(
        SortedSetError::IndexOutOfRange { index: 7, length: 3 },
        "index 7 out of range for sorted set of length 3"
    )]
    #[case::incomparable(
        SortedSetError::Incomparable,
        "elements are not mutually comparable and cannot be sorted"
    )]
    fn display_messages(#[case] error: SortedSetError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn usable_as_boxed_error() {
        let error: Box<dyn std::error::Error> = Box::new(SortedSetError::NotFound);
        assert!(error.source().is_none());
    }
}

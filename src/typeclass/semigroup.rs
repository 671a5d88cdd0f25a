//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use std::collections::BTreeSet;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use sortedset::typeclass::Semigroup;
/// use std::collections::BTreeSet;
///
/// let a: BTreeSet<char> = ['a', 'b'].into_iter().collect();
/// let b: BTreeSet<char> = ['b', 'c'].into_iter().collect();
/// assert_eq!(a.combine(b).len(), 3);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(x, 1)` returns `x`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// See [`Monoid::combine_all`](super::Monoid::combine_all) for a
    /// version that falls back to the identity element.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// BTreeSet Implementation
// =============================================================================

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, mut other: Self) -> Self {
        if self.len() < other.len() {
            std::mem::swap(&mut self, &mut other);
        }
        self.append(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(elements: &[i32]) -> BTreeSet<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    #[case::disjoint(&[1, 2], &[3, 4], &[1, 2, 3, 4])]
    #[case::overlapping(&[1, 2, 3], &[2, 3, 4], &[1, 2, 3, 4])]
    #[case::left_empty(&[], &[5], &[5])]
    #[case::right_empty(&[5], &[], &[5])]
    fn btreeset_combine_is_union(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] expected: &[i32],
    ) {
        assert_eq!(set(left).combine(set(right)), set(expected));
    }

    #[rstest]
    fn combine_ref_keeps_operands() {
        let left = set(&[1]);
        let right = set(&[2]);
        let union = left.combine_ref(&right);
        assert_eq!(union, set(&[1, 2]));
        assert_eq!(left, set(&[1]));
        assert_eq!(right, set(&[2]));
    }

    #[rstest]
    fn combine_n_of_set_is_idempotent() {
        assert_eq!(set(&[1, 2]).combine_n(4), set(&[1, 2]));
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = set(&[1]).combine_n(0);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let sets: Vec<BTreeSet<i32>> = Vec::new();
        assert_eq!(BTreeSet::reduce_all(sets), None);
    }

    #[rstest]
    fn reduce_all_unions_every_set() {
        let sets = vec![set(&[3]), set(&[1]), set(&[2, 3])];
        assert_eq!(BTreeSet::reduce_all(sets), Some(set(&[1, 2, 3])));
    }
}

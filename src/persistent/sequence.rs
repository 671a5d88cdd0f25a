//! The read-only capability set shared by sorted collections.
//!
//! [`SortedSequence`] names the operations a caller can rely on for any
//! collection that stores unique elements in ascending order: membership,
//! length, ordered iteration, positional access and index lookup.
//!
//! It is implemented by [`SortedSet`] and by the standard library's
//! [`BTreeSet`], so generic code can be written once and run over either.
//!
//! # Examples
//!
//! ```rust
//! use sortedset::persistent::{SortedSequence, SortedSet};
//! use std::collections::BTreeSet;
//!
//! fn median<S: SortedSequence>(sequence: &S) -> Option<&S::Element> {
//!     sequence.element_at(sequence.len() / 2)
//! }
//!
//! let sorted = SortedSet::from([9, 1, 5]);
//! let tree: BTreeSet<i32> = [9, 1, 5].into_iter().collect();
//! assert_eq!(median(&sorted), Some(&5));
//! assert_eq!(median(&tree), Some(&5));
//! ```

use std::collections::BTreeSet;

use super::sorted_set::{Iter, SortedSet};

/// A collection of unique elements exposed in ascending order.
///
/// # Laws
///
/// For every implementation:
///
/// - `sorted_iter()` yields exactly `len()` elements, strictly ascending.
/// - `contains_element(x)` iff `sorted_iter()` yields `x`.
/// - `element_at(position_of(x)?) == Some(x)` for every member `x`.
/// - `count_of(x)` is 1 for members and 0 otherwise.
pub trait SortedSequence {
    /// The element type.
    type Element;

    /// Iterator over the elements in ascending order.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `element` is a member.
    fn contains_element(&self, element: &Self::Element) -> bool;

    /// Returns an iterator over the elements in ascending order.
    fn sorted_iter(&self) -> Self::Iter<'_>;

    /// Returns the element at `index` in ascending order.
    fn element_at(&self, index: usize) -> Option<&Self::Element>;

    /// Returns the ascending position of `element`, if it is a member.
    fn position_of(&self, element: &Self::Element) -> Option<usize>;

    /// Returns how many times `element` occurs (0 or 1).
    fn count_of(&self, element: &Self::Element) -> usize {
        usize::from(self.contains_element(element))
    }
}

impl<T: PartialOrd> SortedSequence for SortedSet<T> {
    type Element = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn sorted_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.index_of(element).ok()
    }

    fn count_of(&self, element: &T) -> usize {
        self.count(element)
    }
}

/// Positional queries walk the tree, so `element_at` and `position_of`
/// are O(n) here.
impl<T: Ord> SortedSequence for BTreeSet<T> {
    type Element = T;
    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn sorted_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn position_of(&self, element: &T) -> Option<usize> {
        self.contains(element)
            .then(|| self.range::<T, _>(..element).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ascending<S: SortedSequence>(sequence: &S) -> Vec<&S::Element> {
        sequence.sorted_iter().collect()
    }

    #[rstest]
    fn sorted_set_and_btreeset_agree() {
        let input = [8, 3, 3, 5, 1];
        let sorted = SortedSet::from(input);
        let tree: BTreeSet<i32> = input.into_iter().collect();

        assert_eq!(SortedSequence::len(&sorted), SortedSequence::len(&tree));
        assert_eq!(ascending(&sorted), ascending(&tree));
        for probe in 0..10 {
            assert_eq!(sorted.contains_element(&probe), tree.contains_element(&probe));
            assert_eq!(sorted.position_of(&probe), tree.position_of(&probe));
            assert_eq!(sorted.count_of(&probe), tree.count_of(&probe));
        }
        for index in 0..6 {
            assert_eq!(sorted.element_at(index), tree.element_at(index));
        }
    }

    #[rstest]
    #[case::member(5, Some(2))]
    #[case::smallest(1, Some(0))]
    #[case::absent(4, None)]
    fn btreeset_position_of(#[case] probe: i32, #[case] expected: Option<usize>) {
        let tree: BTreeSet<i32> = [1, 3, 5, 8].into_iter().collect();
        assert_eq!(tree.position_of(&probe), expected);
    }

    #[rstest]
    fn default_is_empty_uses_len() {
        let empty: SortedSet<i32> = SortedSet::new();
        assert!(SortedSequence::is_empty(&empty));
        assert!(!SortedSequence::is_empty(&SortedSet::from([1])));
    }
}

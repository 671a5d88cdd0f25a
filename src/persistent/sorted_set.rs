//! Immutable sorted set with sequence-style access.
//!
//! This module provides [`SortedSet`], a collection that keeps its elements
//! in strictly ascending order with no duplicates. It supports both set
//! queries (membership, union, intersection) and sequence queries
//! (positional access, slicing, index lookup).
//!
//! # Storage
//!
//! Elements live in a shared `Arc<[T]>` and each set is a window over that
//! storage. Cloning and slicing copy the `Arc` and adjust the window, so they
//! run in O(1) without cloning any element. No operation writes to the
//! storage after construction.
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity    |
//! |-----------------------------|---------------|
//! | construction                | O(n log n)    |
//! | `from_sorted_vec`           | O(n)          |
//! | `contains` / `index_of`     | O(log n)      |
//! | `count`                     | O(log n)      |
//! | `len` / `get` / `try_get`   | O(1)          |
//! | `slice` / `repeat` / clone  | O(1)          |
//! | `union` / `intersection`    | O(n + m)      |
//! | `difference`                | O(n + m)      |
//! | `symmetric_difference`      | O(n + m)      |
//!
//! # Examples
//!
//! ```rust
//! use sortedset::persistent::SortedSet;
//!
//! let set: SortedSet<i32> = [3, 1, 2, 3, 1].into_iter().collect();
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//! assert!(!set.contains(&5));
//!
//! // Positional access and index lookup are inverse to each other
//! assert_eq!(set.index_of(&3), Ok(2));
//! assert_eq!(set.get(2), Some(&3));
//!
//! // Slicing shares storage and yields another set
//! assert_eq!(set.slice(0..2), SortedSet::from([1, 2]));
//!
//! // Concatenation is union
//! let merged = set + SortedSet::from([2, 3, 4]);
//! assert_eq!(merged.as_slice(), &[1, 2, 3, 4]);
//! ```

use std::any::Any;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, BitAnd, BitOr, BitXor, Bound, Index, Mul, RangeBounds, Sub};
use std::sync::Arc;

use super::error::SortedSetError;
use super::merge::{self, MergeMode};
use crate::typeclass::{Monoid, Semigroup};

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

/// An immutable sequence of unique elements in ascending order.
///
/// Construction sorts and deduplicates its input. Every operation that
/// would change the contents returns a new set instead.
///
/// # Type Parameters
///
/// * `T` - The element type. Infallible construction and the set algebra
///   require `Ord`; lookups only need `PartialOrd`, and
///   [`SortedSet::try_from_iter`] accepts partially ordered input.
///
/// # Examples
///
/// ```rust
/// use sortedset::persistent::SortedSet;
///
/// let set = SortedSet::from(vec!["pear", "apple", "fig", "apple"]);
/// let names: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(names, vec!["apple", "fig", "pear"]);
/// ```
pub struct SortedSet<T> {
    storage: Arc<[T]>,
    start: usize,
    end: usize,
}

// =============================================================================
// Structure
// =============================================================================

impl<T> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_storage(Arc::from(Vec::<T>::new()))
    }

    fn from_storage(storage: Arc<[T]>) -> Self {
        let end = storage.len();
        Self {
            storage,
            start: 0,
            end,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the elements as an ascending slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from([2, 1]);
    /// assert_eq!(set.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.start..self.end]
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks the set in
    /// descending order. Each call starts a fresh traversal.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns the element at `index` in ascending order, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::{SortedSet, SortedSetError};
    ///
    /// let set = SortedSet::from([30, 10, 20]);
    /// assert_eq!(set.try_get(0), Ok(&10));
    /// assert_eq!(
    ///     set.try_get(3),
    ///     Err(SortedSetError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, SortedSetError> {
        self.get(index).ok_or(SortedSetError::IndexOutOfRange {
            index,
            length: self.len(),
        })
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the sub-range of the set selected by `range`.
    ///
    /// Bounds beyond the end are clamped to the length, and a range whose
    /// start lies past its end selects nothing. The result shares storage
    /// with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.slice(1..3).as_slice(), &[2, 3]);
    /// assert_eq!(set.slice(3..).as_slice(), &[4, 5]);
    /// assert_eq!(set.slice(..=1).as_slice(), &[1, 2]);
    /// assert!(set.slice(4..2).is_empty());
    /// assert_eq!(set.slice(2..100).as_slice(), &[3, 4, 5]);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let length = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(length);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .clamp(start, length);

        Self {
            storage: Arc::clone(&self.storage),
            start: self.start + start,
            end: self.start + end,
        }
    }

    /// Repeats the set `times` times.
    ///
    /// Duplicates collapse, so any positive count yields the same contents
    /// and zero yields the empty set. `set * n` and `n * set` are shorthand
    /// for this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from([5, 10]);
    /// assert_eq!(set.repeat(3), set);
    /// assert!(set.repeat(0).is_empty());
    /// ```
    #[must_use]
    pub fn repeat(&self, times: usize) -> Self {
        if times == 0 {
            Self::new()
        } else {
            self.clone()
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Ord> SortedSet<T> {
    fn from_unsorted_vec(mut elements: Vec<T>) -> Self {
        #[cfg(feature = "tracing")]
        let input_length = elements.len();

        elements.sort();
        elements.dedup();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            input_length,
            unique_length = elements.len(),
            "normalized sorted set input"
        );

        Self::from_storage(Arc::from(elements))
    }
}

impl<T: PartialOrd> SortedSet<T> {
    /// Creates a set from elements that may only be partially ordered.
    ///
    /// The input is sorted and deduplicated exactly like the infallible
    /// constructors, but every comparison is checked.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::Incomparable`] if any two elements cannot
    /// be ordered relative to each other, such as a floating-point `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::{SortedSet, SortedSetError};
    ///
    /// let set = SortedSet::try_from_iter([2.5, 0.5, 2.5]).unwrap();
    /// assert_eq!(set.as_slice(), &[0.5, 2.5]);
    ///
    /// let invalid = SortedSet::try_from_iter([1.0, f64::NAN]);
    /// assert_eq!(invalid, Err(SortedSetError::Incomparable));
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, SortedSetError>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = iter.into_iter().collect();
        #[cfg(feature = "tracing")]
        let input_length = elements.len();

        let mut incomparable = false;
        let elements = merge::sort_dedup_by(elements, |left, right| {
            left.partial_cmp(right).unwrap_or_else(|| {
                incomparable = true;
                Ordering::Less
            })
        });

        if incomparable || !merge::is_strictly_increasing(&elements) {
            #[cfg(feature = "tracing")]
            tracing::trace!(input_length, "rejected partially ordered input");
            return Err(SortedSetError::Incomparable);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            input_length,
            unique_length = elements.len(),
            "normalized sorted set input"
        );

        Ok(Self::from_storage(Arc::from(elements)))
    }

    /// Creates a set from a vector that is already strictly increasing.
    ///
    /// Skips the sort. In debug builds the precondition is checked with
    /// `debug_assert!`; in release builds a violating input produces a set
    /// whose lookups give wrong answers (a logic error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![2, 4, 6]);
    /// assert!(set.contains(&4));
    /// ```
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<T>) -> Self {
        debug_assert!(
            merge::is_strictly_increasing(&elements),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self::from_storage(Arc::from(elements))
    }
}

// =============================================================================
// Lookup
// =============================================================================

impl<T: PartialOrd> SortedSet<T> {
    /// Lower-bound binary search.
    ///
    /// `Ok(position)` if found, `Err(insertion_point)` if absent, `None` if
    /// the probe cannot be compared with a stored element.
    fn search<Q>(&self, element: &Q) -> Option<Result<usize, usize>>
    where
        T: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        let elements = self.as_slice();
        let mut low = 0;
        let mut high = elements.len();

        while low < high {
            let middle = low + (high - low) / 2;
            match elements[middle].borrow().partial_cmp(element)? {
                Ordering::Less => low = middle + 1,
                Ordering::Greater => high = middle,
                Ordering::Equal => return Some(Ok(middle)),
            }
        }

        Some(Err(low))
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Uses binary search, so the cost is O(log n). Borrowed forms of the
    /// element type are accepted, e.g. `&str` for a `SortedSet<String>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from(vec!["b".to_string(), "a".to_string()]);
    /// assert!(set.contains("a"));
    /// assert!(!set.contains("c"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        matches!(self.search(element), Some(Ok(_)))
    }

    /// Returns the ascending position of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::NotFound`] if `element` is not in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::{SortedSet, SortedSetError};
    ///
    /// let set = SortedSet::from([7, 3, 5]);
    /// assert_eq!(set.index_of(&5), Ok(1));
    /// assert_eq!(set.index_of(&4), Err(SortedSetError::NotFound));
    /// ```
    pub fn index_of<Q>(&self, element: &Q) -> Result<usize, SortedSetError>
    where
        T: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        match self.search(element) {
            Some(Ok(position)) => Ok(position),
            Some(Err(_)) | None => Err(SortedSetError::NotFound),
        }
    }

    /// Returns how many times `element` occurs: 1 if present, 0 otherwise.
    #[must_use]
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        usize::from(self.contains(element))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: PartialOrd + Clone> SortedSet<T> {
    /// Returns the union of two partially ordered sets.
    ///
    /// # Errors
    ///
    /// Returns [`SortedSetError::Incomparable`] if an element of `self`
    /// cannot be ordered against an element of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let left = SortedSet::try_from_iter([1.5, 0.5]).unwrap();
    /// let right = SortedSet::try_from_iter([2.5, 1.5]).unwrap();
    /// let union = left.try_union(&right).unwrap();
    /// assert_eq!(union.as_slice(), &[0.5, 1.5, 2.5]);
    /// ```
    pub fn try_union(&self, other: &Self) -> Result<Self, SortedSetError> {
        let mut incomparable = false;
        let elements = merge::merge_slices(
            self.as_slice(),
            other.as_slice(),
            MergeMode::UNION,
            |left, right| {
                left.partial_cmp(right).unwrap_or_else(|| {
                    incomparable = true;
                    Ordering::Less
                })
            },
        );

        if incomparable || !merge::is_strictly_increasing(&elements) {
            return Err(SortedSetError::Incomparable);
        }
        Ok(Self::from_storage(Arc::from(elements)))
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T: Ord + Clone> SortedSet<T> {
    fn merge_with(&self, other: &Self, mode: MergeMode) -> Self {
        Self::from_storage(Arc::from(merge::merge_slices(
            self.as_slice(),
            other.as_slice(),
            mode,
            T::cmp,
        )))
    }

    /// Returns the union of both sets. Also available as `+` and `|`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let union = SortedSet::from([1, 2, 3]).union(&SortedSet::from([2, 3, 4]));
    /// assert_eq!(union.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.merge_with(other, MergeMode::UNION)
    }

    /// Returns the elements present in both sets. Also available as `&`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let shared = SortedSet::from([1, 2, 3, 4]) & SortedSet::from([3, 4, 5]);
    /// assert_eq!(shared.as_slice(), &[3, 4]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge_with(other, MergeMode::INTERSECTION)
    }

    /// Returns the elements of `self` that are not in `other`. Also available as `-`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let rest = SortedSet::from([1, 2, 3, 4]) - SortedSet::from([3, 4, 5]);
    /// assert_eq!(rest.as_slice(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        self.merge_with(other, MergeMode::DIFFERENCE)
    }

    /// Returns the elements in exactly one of the two sets. Also available as `^`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let either = SortedSet::from([1, 2, 3]) ^ SortedSet::from([2, 3, 4]);
    /// assert_eq!(either.as_slice(), &[1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.merge_with(other, MergeMode::SYMMETRIC_DIFFERENCE)
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<T: PartialEq + 'static> SortedSet<T> {
    /// Compares against a value of unknown type.
    ///
    /// Returns `Some(result)` if `other` is a `SortedSet<T>`, and `None`
    /// ("comparison not supported") for any other type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::persistent::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2]);
    /// assert_eq!(set.equals(&SortedSet::from([2, 1])), Some(true));
    /// assert_eq!(set.equals(&SortedSet::from([3])), Some(false));
    /// assert_eq!(set.equals(&vec![1, 2]), None);
    /// ```
    #[must_use]
    pub fn equals(&self, other: &dyn Any) -> Option<bool> {
        other
            .downcast_ref::<Self>()
            .map(|other_set| self == other_set)
    }
}

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T: PartialOrd> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SortedSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for SortedSet<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            formatter.write_str("SortedSet()")
        } else {
            formatter
                .debug_tuple("SortedSet")
                .field(&self.as_slice())
                .finish()
        }
    }
}

impl<T> Index<usize> for SortedSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.try_get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_unsorted_vec(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_unsorted_vec(Vec::from(elements))
    }
}

impl<T> From<BTreeSet<T>> for SortedSet<T> {
    fn from(elements: BTreeSet<T>) -> Self {
        Self::from_storage(elements.into_iter().collect())
    }
}

impl<T: Ord + Clone> Semigroup for SortedSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Ord + Clone> Monoid for SortedSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Operators
// =============================================================================

macro_rules! impl_set_operator {
    ($operator:ident, $operator_method:ident, $set_method:ident) => {
        impl<T: Ord + Clone> $operator for SortedSet<T> {
            type Output = Self;

            fn $operator_method(self, other: Self) -> Self::Output {
                self.$set_method(&other)
            }
        }

        impl<T: Ord + Clone> $operator<&SortedSet<T>> for &SortedSet<T> {
            type Output = SortedSet<T>;

            fn $operator_method(self, other: &SortedSet<T>) -> Self::Output {
                self.$set_method(other)
            }
        }
    };
}

impl_set_operator!(Add, add, union);
impl_set_operator!(BitOr, bitor, union);
impl_set_operator!(BitAnd, bitand, intersection);
impl_set_operator!(Sub, sub, difference);
impl_set_operator!(BitXor, bitxor, symmetric_difference);

impl<T> Mul<usize> for SortedSet<T> {
    type Output = Self;

    fn mul(self, times: usize) -> Self::Output {
        self.repeat(times)
    }
}

impl<T> Mul<usize> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, times: usize) -> Self::Output {
        self.repeat(times)
    }
}

impl<T> Mul<SortedSet<T>> for usize {
    type Output = SortedSet<T>;

    fn mul(self, set: SortedSet<T>) -> Self::Output {
        set.repeat(self)
    }
}

impl<T> Mul<&SortedSet<T>> for usize {
    type Output = SortedSet<T>;

    fn mul(self, set: &SortedSet<T>) -> Self::Output {
        set.repeat(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`SortedSet`], in ascending order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
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

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a [`SortedSet`], in ascending order.
///
/// The storage may be shared with other sets, so elements are cloned out.
pub struct IntoIter<T> {
    storage: Arc<[T]>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.storage[self.front].clone();
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.storage[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            storage: self.storage,
            front: self.start,
            back: self.end,
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<'a, T: Sync + 'a> rayon::iter::IntoParallelIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        use rayon::prelude::*;
        self.as_slice().par_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedSet::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(SortedSet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================



#[cfg(all(test, feature = "rayon"))]
mod rayon_tests {
    use super::*;
    use rayon::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn par_iter_visits_every_element() {
        let set: SortedSet<u64> = (1..=1000).collect();
        let total: u64 = set.par_iter().sum();
        assert_eq!(total, 500_500);
    }

    #[rstest]
    fn par_iter_preserves_order_when_collected() {
        let set = SortedSet::from([3, 1, 2]);
        let collected: Vec<i32> = set.par_iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}

//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use std::collections::BTreeSet;

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use sortedset::typeclass::{Monoid, Semigroup};
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(BTreeSet::empty().combine(set.clone()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_btreeset_left_identity(value in prop::collection::btree_set(any::<i32>(), 0..20)) {
            prop_assert_eq!(BTreeSet::empty().combine(value.clone()), value);
        }

        #[test]
        fn prop_btreeset_right_identity(value in prop::collection::btree_set(any::<i32>(), 0..20)) {
            prop_assert_eq!(value.clone().combine(BTreeSet::empty()), value);
        }
    }
}

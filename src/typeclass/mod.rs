//! Algebraic type classes for combining collections.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! Sets form a monoid under union: the empty set is the identity and
//! union is associative. Both `std::collections::BTreeSet` and
//! [`SortedSet`](crate::persistent::SortedSet) implement these traits.
//!
//! # Examples
//!
//! ```rust
//! use sortedset::typeclass::{Monoid, Semigroup};
//! use std::collections::BTreeSet;
//!
//! let left: BTreeSet<i32> = [1, 2].into_iter().collect();
//! let right: BTreeSet<i32> = [2, 3].into_iter().collect();
//! let union = left.combine(right);
//! assert_eq!(union.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert!(BTreeSet::<i32>::empty().is_empty());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;

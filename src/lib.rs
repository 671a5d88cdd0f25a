//! # sortedset
//!
//! An immutable, sorted, duplicate-free sequence for Rust.
//!
//! ## Overview
//!
//! [`SortedSet`](persistent::SortedSet) keeps its elements in ascending
//! order with no duplicates. It behaves like a read-only sequence
//! (positional access, slicing, index lookup) and like a set (logarithmic
//! membership, union, intersection, difference).
//!
//! - **Persistent Collections**: `SortedSet` and the `SortedSequence` capability trait
//! - **Type Classes**: `Semigroup` and `Monoid`, with union as the combining operation
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`
//! - `persistent`: `SortedSet` and `SortedSequence`
//! - `serde`: `Serialize`/`Deserialize` for `SortedSet`
//! - `rayon`: parallel iteration
//! - `tracing`: trace events during construction
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sortedset::prelude::*;
//!
//! let set: SortedSet<i32> = [3, 1, 2, 3, 1].into_iter().collect();
//! assert_eq!(set.as_slice(), &[1, 2, 3]);
//! assert!(set.contains(&2));
//!
//! let merged = set + SortedSet::from([2, 3, 4]);
//! assert_eq!(merged.as_slice(), &[1, 2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sortedset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

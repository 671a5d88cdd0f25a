//! Persistent (immutable) sorted collections.
//!
//! - [`SortedSet`]: Sorted, duplicate-free sequence over shared storage
//! - [`SortedSequence`]: Read-only capability trait for sorted collections
//! - [`SortedSetError`]: Failure modes of lookups and construction
//!
//! # Structural Sharing
//!
//! A `SortedSet` never mutates its storage. Clones, slices and positive
//! repetitions reuse the same allocation; only operations that produce new
//! contents (construction, union, intersection, ...) allocate.
//!
//! # Examples
//!
//! ```rust
//! use sortedset::persistent::SortedSet;
//!
//! let set = SortedSet::from([5, 1, 3]);
//! let head = set.slice(..2);
//! assert_eq!(head.as_slice(), &[1, 3]);
//! assert_eq!(set.len(), 3); // Original unchanged
//!
//! let doubled = set.clone() * 2;
//! assert_eq!(doubled, set); // Duplicates collapse
//! assert!((0 * set).is_empty());
//! ```

mod error;
mod merge;
mod sequence;
mod sorted_set;

pub use error::SortedSetError;
pub use sequence::SortedSequence;
pub use sorted_set::IntoIter as SortedSetIntoIterator;
pub use sorted_set::Iter as SortedSetIterator;
pub use sorted_set::SortedSet;

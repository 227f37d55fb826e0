//! lambda-utils: four closure-driven utilities over slices and hash maps.
//!
//! Overview
//! - `dup`: every element followed by a transformed copy of itself.
//! - `opt_filter`: every element wrapped in `Some` when a predicate holds,
//!   `None` otherwise; length and order are preserved.
//! - `group`: elements bucketed into sets keyed by a key function.
//! - `fill`: absent values of a map replaced by values from a supplier.
//!
//! Constraints
//! - Inputs are borrowed immutably and never changed; each call allocates
//!   and returns a fresh result.
//! - Stateless: no caches, no globals. Calls may run concurrently on the
//!   same input.
//! - Callbacks are `FnMut` and run sequentially on the calling thread.
//!   A panicking callback unwinds through the operation unchanged.
//!
//! Fallible callbacks
//! - Each operation has a `try_*` twin whose callback returns
//!   `Result<_, E>`. The first error is returned as-is and the partially
//!   built result is dropped; no partial output ever reaches the caller.
//!
//! Hashing
//! - Maps and sets are `hashbrown` containers. `group` and `fill` have
//!   `*_with_hasher` variants for callers that need a specific
//!   `BuildHasher` (e.g. a deterministic one in tests).
//!
//! ```
//! use lambda_utils::{dup, fill, group, opt_filter};
//! use hashbrown::HashMap;
//!
//! assert_eq!(dup(&[1, 2, 3], |x| x * 10), vec![1, 10, 2, 20, 3, 30]);
//! assert_eq!(
//!     opt_filter(&[1, 2, 3, 4], |x| x % 2 == 0),
//!     vec![None, Some(2), None, Some(4)]
//! );
//!
//! let parity = group(&[1, 2, 3, 4, 5], |x| if x % 2 == 0 { "even" } else { "odd" });
//! assert_eq!(parity["odd"].len(), 3);
//! assert!(parity["even"].contains(&4));
//!
//! let sparse: HashMap<&str, Option<i32>> = [("a", Some(1)), ("b", None)].into_iter().collect();
//! let dense = fill(&sparse, || 0);
//! assert_eq!(dense["a"], 1);
//! assert_eq!(dense["b"], 0);
//! ```

pub mod dup;
pub mod fill;
pub mod group;
pub mod opt_filter;
mod proptests;

// Public surface
pub use dup::{dup, try_dup};
pub use fill::{fill, fill_with_hasher, try_fill};
pub use group::{group, group_with_hasher, try_group, Groups};
pub use opt_filter::{opt_filter, try_opt_filter};

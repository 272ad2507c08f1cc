//! # rbmap
//!
//! An ordered map backed by a red-black tree.
//!
//! ## Overview
//!
//! [`RedBlackTreeMap`] maps unique, totally ordered keys to values. Insert,
//! remove and point lookup run in guaranteed O(log N) regardless of the
//! order in which keys arrive, and sorted or range enumeration needs no
//! separate index.
//!
//! - **Balanced tree engine**: recursive insertion with backtracking
//!   red-red repair, and deletion with double-black repair on the way back up
//! - **Map facade**: [`RedBlackTreeMap`], which owns the root and the element count
//! - **Collection abstraction**: the [`Collection`] trait describing the
//!   key-value contract the map implements
//! - **Invariant checking**: [`RedBlackTreeMap::validate`] and [`InvariantViolation`]
//!
//! ## Feature Flags
//!
//! - `strict-invariants`: validate the whole tree after every mutation and
//!   panic on the first violation
//!
//! ## Example
//!
//! ```rust
//! use rbmap::prelude::*;
//!
//! let mut map = RedBlackTreeMap::new();
//! for key in [10, 20, 30] {
//!     map.insert(key, key * 2);
//! }
//!
//! assert_eq!(map.keys(), vec![&10, &20, &30]);
//! assert_eq!(map.find(&20), Some(&40));
//! assert_eq!(map.height(), 2);
//! assert!(map.validate().is_ok());
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
/// use rbmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::error::InvariantViolation;
    pub use crate::treemap::{RedBlackTreeMap, TreeStats};
}

pub mod collection;
pub mod error;
pub mod treemap;

pub use collection::Collection;
pub use error::InvariantViolation;
pub use treemap::{RedBlackTreeMap, TreeStats};

//! The generic key-value collection contract.
//!
//! [`Collection`] describes what any keyed container offers to callers that
//! should not care how entries are stored: insertion, removal, point and
//! range lookup, sorted key listing, and size and height queries.
//! [`RedBlackTreeMap`](crate::RedBlackTreeMap) is the implementation
//! provided by this crate.
//!
//! # Examples
//!
//! ```rust
//! use rbmap::{Collection, RedBlackTreeMap};
//!
//! fn fill<C: Collection<i32, &'static str>>(collection: &mut C) {
//!     collection.insert(2, "two");
//!     collection.insert(1, "one");
//!     collection.insert(3, "three");
//! }
//!
//! let mut map = RedBlackTreeMap::new();
//! fill(&mut map);
//! assert_eq!(Collection::size(&map), 3);
//! assert_eq!(Collection::sort(&map), vec![&1, &2, &3]);
//! assert!(Collection::remove(&mut map, &2));
//! assert!(!Collection::remove(&mut map, &2));
//! ```

/// A mapping from unique, totally ordered keys to values.
pub trait Collection<K, V> {
    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is overwritten, the size is
    /// unchanged and the previous value is returned.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry for `key`, returning `true` if it was present.
    fn remove(&mut self, key: &K) -> bool;

    /// Returns the value stored for `key`, if any.
    fn find(&self, key: &K) -> Option<&V>;

    /// Returns every key `k` with `low <= k <= high`.
    ///
    /// The order of the returned keys is unspecified by this contract.
    fn find_range(&self, low: &K, high: &K) -> Vec<&K>;

    /// Returns every key in ascending order.
    fn keys(&self) -> Vec<&K>;

    /// Returns every key in ascending order.
    ///
    /// Identical to [`keys`](Self::keys).
    fn sort(&self) -> Vec<&K> {
        self.keys()
    }

    /// Returns the number of stored entries.
    fn size(&self) -> usize;

    /// Returns the height of the underlying structure, 0 when empty.
    fn height(&self) -> usize;

    /// Returns `true` if the collection holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

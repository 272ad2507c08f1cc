//! Ordered map based on a red-black tree.
//!
//! This module provides [`RedBlackTreeMap`], a mutable ordered map that owns
//! its nodes exclusively and keeps itself balanced on every insert and
//! remove.
//!
//! # Overview
//!
//! - O(log N) find
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) min/max
//! - O(log N + k) range queries where k is the number of results
//! - O(1) size and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use rbmap::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! // Keys are always in sorted order
//! assert_eq!(map.keys(), vec![&1, &2, &3]);
//!
//! // Closed range queries
//! assert_eq!(map.find_range(&2, &3), vec![&2, &3]);
//! ```
//!
//! # Internal Structure
//!
//! The red-black tree maintains the following invariants:
//! 1. Keys are in search-tree order
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from a node to an empty position has the same number of black nodes
//!
//! These invariants keep the tree height within `2 * log2(N + 1)`.

mod balance;
mod node;
mod traversal;
mod validate;

pub use validate::TreeStats;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::collection::Collection;
use balance::BlackHeight;
use node::{Color, Link};

// =============================================================================
// RedBlackTreeMap Definition
// =============================================================================

/// An ordered map based on a red-black tree.
///
/// Keys must implement `Ord`. The map holds one value per key; inserting an
/// existing key overwrites its value.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `find`         | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `min`/`max`    | O(log N)          |
/// | `find_range`   | O(log N + k)      |
/// | `keys`/`sort`  | O(N)              |
/// | `height`       | O(N)              |
/// | `size`         | O(1)              |
/// | `clone`        | O(N log N)        |
///
/// # Examples
///
/// ```rust
/// use rbmap::RedBlackTreeMap;
///
/// let mut map = RedBlackTreeMap::new();
/// for key in [10, 20, 30, 40, 50, 60, 70] {
///     map.insert(key, key.to_string());
/// }
///
/// assert_eq!(map.find(&40), Some(&"40".to_string()));
/// assert_eq!(map.find(&5), None);
/// assert!(map.height() <= 4);
/// ```
pub struct RedBlackTreeMap<K, V> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
}

static_assertions::assert_impl_all!(RedBlackTreeMap<i32, String>: Send, Sync);

impl<K, V> RedBlackTreeMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<i32, String> = RedBlackTreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is maintained by insert and remove, never recomputed.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.length
    }

    /// Returns the number of entries in the map.
    ///
    /// Same as [`size`](Self::size).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes on the longest root-to-empty path.
    ///
    /// An empty map has height 0 and a single entry has height 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// assert_eq!(map.height(), 0);
    /// map.insert(1, ());
    /// assert_eq!(map.height(), 1);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        traversal::height(&self.root)
    }

    /// Returns the number of black nodes on any root-to-empty path.
    #[must_use]
    pub fn black_height(&self) -> usize {
        traversal::black_height(&self.root)
    }

    /// Removes every entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map: RedBlackTreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.length, "clearing tree");
        self.root = None;
        self.length = 0;
    }

    /// Returns all keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<i32, ()> = [3, 1, 2].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(map.keys(), vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    /// Returns all keys in ascending order.
    ///
    /// This is an alias for [`keys`](Self::keys).
    #[inline]
    #[must_use]
    pub fn sort(&self) -> Vec<&K> {
        self.keys()
    }

    /// Returns all values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.entries().into_iter().map(|(_, value)| value).collect()
    }

    /// Returns all entries in ascending key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        traversal::in_order(&self.root, &mut entries);
        entries
    }

    /// Returns all entries root first, the re-insertion order used by copies.
    fn preorder_entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        traversal::pre_order(&self.root, &mut entries);
        entries
    }

    /// Returns the entry with the minimum key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.find("hello"), Some(&42));
    /// assert_eq!(map.find("world"), None);
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(node.key.borrow()) {
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
                std::cmp::Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Same as [`find`](Self::find).
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.find(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            link = match key.cmp(node.key.borrow()) {
                std::cmp::Ordering::Less => node.left.as_deref_mut(),
                std::cmp::Ordering::Greater => node.right.as_deref_mut(),
                std::cmp::Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns every key `k` with `low <= k <= high`, in ascending order.
    ///
    /// Subtrees entirely outside the range are not visited. If `low > high`
    /// the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<i32, ()> = (1..=7).map(|key| (key * 10, ())).collect();
    /// assert_eq!(map.find_range(&15, &45), vec![&20, &30, &40]);
    /// assert!(map.find_range(&45, &15).is_empty());
    /// ```
    #[must_use]
    pub fn find_range<Q>(&self, low: &Q, high: &Q) -> Vec<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut keys = Vec::new();
        if low <= high {
            traversal::range(&self.root, low, high, &mut keys);
        }
        keys
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains the key, the value is replaced in place,
    /// the size is unchanged and the previous value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, replaced) = balance::insert(self.root.take(), key, value);

        // Make root black
        root.color = Color::Black;
        self.root = Some(root);

        if replaced.is_none() {
            self.length += 1;
        }
        self.check_invariants();
        replaced
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key leaves the map unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let mut map = RedBlackTreeMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    ///
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.size(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root.take()?;
        let (root, removed, height) = balance::remove(root, key);
        self.root = root;

        // The root absorbs any deficiency that propagated all the way up.
        if height == BlackHeight::Deficient {
            tracing::trace!("deficiency absorbed at root");
        }
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }

        let (_, value) = removed?;
        self.length -= 1;
        self.check_invariants();
        Some(value)
    }

    #[cfg(feature = "strict-invariants")]
    fn check_invariants(&self) {
        if let Err(violation) = self.validate() {
            panic!("red-black invariant violated: {violation}");
        }
    }

    #[cfg(not(feature = "strict-invariants"))]
    #[inline]
    const fn check_invariants(&self) {}
}

impl<K: Clone + Ord, V: Clone> RedBlackTreeMap<K, V> {
    /// Inserts every entry of `source`, visiting it root first.
    fn rebuild_from(&mut self, source: &Self) {
        tracing::debug!(entries = source.length, "rebuilding tree from pre-order copy");
        for (key, value) in source.preorder_entries() {
            self.insert(key.clone(), value.clone());
        }
    }
}

// =============================================================================
// Copy and Assignment
// =============================================================================

/// Deep copy: the clone owns an independent node graph built by
/// re-inserting the source's entries in pre-order.
impl<K: Clone + Ord, V: Clone> Clone for RedBlackTreeMap<K, V> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.rebuild_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.rebuild_from(source);
    }
}

// =============================================================================
// Collection Implementation
// =============================================================================

impl<K: Ord, V> Collection<K, V> for RedBlackTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        Self::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        Self::remove(self, key).is_some()
    }

    fn find(&self, key: &K) -> Option<&V> {
        Self::find(self, key)
    }

    fn find_range(&self, low: &K, high: &K) -> Vec<&K> {
        Self::find_range(self, low, high)
    }

    fn keys(&self) -> Vec<&K> {
        Self::keys(self)
    }

    fn size(&self) -> usize {
        self.length
    }

    fn height(&self) -> usize {
        Self::height(self)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for RedBlackTreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::vec::IntoIter<(&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries().into_iter()
    }
}

impl<K, Q, V> Index<&Q> for RedBlackTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.find(key).expect("key not found in RedBlackTreeMap")
    }
}

impl<K: Ord, V: PartialEq> PartialEq for RedBlackTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        // Shapes may differ; compare the mappings in key order.
        self.entries()
            .into_iter()
            .zip(other.entries())
            .all(|((key, value), (other_key, other_value))| key == other_key && value == other_value)
    }
}

impl<K: Ord, V: Eq> Eq for RedBlackTreeMap<K, V> {}

/// Hashes the length and then every entry in key order, so equal maps hash
/// equally regardless of tree shape.
impl<K: Hash, V: Hash> Hash for RedBlackTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for RedBlackTreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

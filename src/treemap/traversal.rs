//! Read-only recursive walks: in-order, pre-order, range collection and height.

use std::borrow::Borrow;

use super::node::Link;

/// Collects entries in ascending key order.
pub(super) fn in_order<'a, K, V>(link: &'a Link<K, V>, entries: &mut Vec<(&'a K, &'a V)>) {
    if let Some(node) = link {
        in_order(&node.left, entries);
        entries.push((&node.key, &node.value));
        in_order(&node.right, entries);
    }
}

/// Collects entries root first, then the left subtree, then the right.
pub(super) fn pre_order<'a, K, V>(link: &'a Link<K, V>, entries: &mut Vec<(&'a K, &'a V)>) {
    if let Some(node) = link {
        entries.push((&node.key, &node.value));
        pre_order(&node.left, entries);
        pre_order(&node.right, entries);
    }
}

/// Collects keys `k` with `low <= k <= high` in ascending order, skipping
/// subtrees that lie entirely outside the range.
pub(super) fn range<'a, K, V, Q>(link: &'a Link<K, V>, low: &Q, high: &Q, keys: &mut Vec<&'a K>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if let Some(node) = link {
        let key: &Q = node.key.borrow();
        if low < key {
            range(&node.left, low, high, keys);
        }
        if low <= key && key <= high {
            keys.push(&node.key);
        }
        if key < high {
            range(&node.right, low, high, keys);
        }
    }
}

/// Returns the number of nodes on the longest path down from `link`.
pub(super) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| {
        1 + height(&node.left).max(height(&node.right))
    })
}

/// Returns the number of black nodes on the leftmost path down from `link`.
pub(super) fn black_height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| {
        usize::from(node.is_black()) + black_height(&node.left)
    })
}

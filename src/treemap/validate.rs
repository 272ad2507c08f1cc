//! Structural invariant checking.

use super::RedBlackTreeMap;
use super::node::{Node, is_red};
use super::traversal;
use crate::error::InvariantViolation;

/// Shape statistics of a tree that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of nodes reachable from the root.
    pub nodes: usize,
    /// Number of nodes on the longest root-to-empty path.
    pub height: usize,
    /// Number of black nodes on every root-to-empty path.
    pub black_height: usize,
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    /// Validates the red-black tree with the following rules:
    ///
    /// * Keys are in strictly ascending search-tree order.
    /// * The root is black.
    /// * No red node has a red child.
    /// * Every path from a node down to an empty position carries the same
    ///   number of black nodes.
    /// * The recorded size equals the number of reachable nodes.
    ///
    /// Returns the tree's [`TreeStats`] on success and the first
    /// [`InvariantViolation`] found otherwise.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if any rule above is broken.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbmap::RedBlackTreeMap;
    ///
    /// let map: RedBlackTreeMap<i32, ()> = (1..=7).map(|key| (key, ())).collect();
    /// let stats = map.validate().unwrap();
    /// assert_eq!(stats.nodes, 7);
    /// assert!(stats.height <= 4);
    /// ```
    pub fn validate(&self) -> Result<TreeStats, InvariantViolation> {
        if is_red(&self.root) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut nodes = 0;
        let black_height = validate_subtree(self.root.as_deref(), None, None, 0, &mut nodes)?;
        if nodes != self.length {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.length,
                counted: nodes,
            });
        }

        Ok(TreeStats {
            nodes,
            height: traversal::height(&self.root),
            black_height,
        })
    }
}

/// Returns the black height of a valid subtree, counting black nodes only.
fn validate_subtree<K: Ord, V>(
    node: Option<&Node<K, V>>,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
    nodes: &mut usize,
) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };
    *nodes += 1;

    if lower.is_some_and(|lower| node.key <= *lower) || upper.is_some_and(|upper| node.key >= *upper)
    {
        return Err(InvariantViolation::OutOfOrder { depth });
    }
    if node.is_red() && (is_red(&node.left) || is_red(&node.right)) {
        return Err(InvariantViolation::ConsecutiveReds { depth });
    }

    let left = validate_subtree(node.left.as_deref(), lower, Some(&node.key), depth + 1, nodes)?;
    let right = validate_subtree(node.right.as_deref(), Some(&node.key), upper, depth + 1, nodes)?;
    if left != right {
        return Err(InvariantViolation::UnbalancedBlackHeight { depth, left, right });
    }

    Ok(left + usize::from(node.is_black()))
}

#[cfg(test)]
mod tests {
    use super::super::node::{Color, Link};
    use super::*;
    use rstest::rstest;

    fn node(key: i32, color: Color, left: Link<i32, ()>, right: Link<i32, ()>) -> Link<i32, ()> {
        let mut node = Node::new_red(key, ());
        node.color = color;
        node.left = left;
        node.right = right;
        Some(node)
    }

    fn map_with(root: Link<i32, ()>, length: usize) -> RedBlackTreeMap<i32, ()> {
        RedBlackTreeMap { root, length }
    }

    #[rstest]
    fn test_validate_empty() {
        let map: RedBlackTreeMap<i32, ()> = RedBlackTreeMap::new();
        assert_eq!(
            map.validate(),
            Ok(TreeStats {
                nodes: 0,
                height: 0,
                black_height: 0
            })
        );
    }

    #[rstest]
    fn test_validate_detects_red_root() {
        let map = map_with(node(1, Color::Red, None, None), 1);
        assert_eq!(map.validate(), Err(InvariantViolation::RedRoot));
    }

    #[rstest]
    fn test_validate_detects_consecutive_reds() {
        let root = node(
            3,
            Color::Black,
            node(2, Color::Red, node(1, Color::Red, None, None), None),
            node(4, Color::Red, None, None),
        );
        assert_eq!(
            map_with(root, 4).validate(),
            Err(InvariantViolation::ConsecutiveReds { depth: 1 })
        );
    }

    #[rstest]
    fn test_validate_detects_unbalanced_black_height() {
        let root = node(2, Color::Black, node(1, Color::Black, None, None), None);
        assert_eq!(
            map_with(root, 2).validate(),
            Err(InvariantViolation::UnbalancedBlackHeight {
                depth: 0,
                left: 1,
                right: 0
            })
        );
    }

    #[rstest]
    fn test_validate_detects_out_of_order_grandchild() {
        // 5 sits in the left subtree of 4, which search order forbids.
        let root = node(
            4,
            Color::Black,
            node(2, Color::Black, None, node(5, Color::Red, None, None)),
            node(6, Color::Black, None, None),
        );
        assert_eq!(
            map_with(root, 4).validate(),
            Err(InvariantViolation::OutOfOrder { depth: 2 })
        );
    }

    #[rstest]
    fn test_validate_detects_size_mismatch() {
        let map = map_with(node(1, Color::Black, None, None), 2);
        assert_eq!(
            map.validate(),
            Err(InvariantViolation::SizeMismatch {
                recorded: 2,
                counted: 1
            })
        );
    }
}

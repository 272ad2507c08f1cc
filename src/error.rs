//! Error types for red-black invariant checking.
//!
//! No map operation fails at runtime: removing or finding an absent key is
//! reported through `Option`, and inserting an existing key overwrites it.
//! A broken structural invariant is a programming defect, and
//! [`RedBlackTreeMap::validate`](crate::RedBlackTreeMap::validate) reports it
//! as an [`InvariantViolation`].

use thiserror::Error;

/// The first broken red-black invariant found while validating a tree.
///
/// Depths count edges from the root, so the root is at depth 0.
///
/// # Examples
///
/// ```rust
/// use rbmap::InvariantViolation;
///
/// let violation = InvariantViolation::UnbalancedBlackHeight { depth: 1, left: 2, right: 1 };
/// assert_eq!(
///     violation.to_string(),
///     "Unbalanced black height at depth 1: left 2, right 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    #[error("Root node is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("Red node at depth {depth} has a red child")]
    ConsecutiveReds {
        /// Depth of the red parent.
        depth: usize,
    },

    /// Two subtrees of the same node carry different black heights.
    #[error("Unbalanced black height at depth {depth}: left {left}, right {right}")]
    UnbalancedBlackHeight {
        /// Depth of the node whose subtrees disagree.
        depth: usize,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// A key is not strictly between the bounds set by its ancestors.
    #[error("Key at depth {depth} breaks search-tree order")]
    OutOfOrder {
        /// Depth of the misplaced node.
        depth: usize,
    },

    /// The recorded element count differs from the number of reachable nodes.
    #[error("Size mismatch: recorded {recorded}, counted {counted}")]
    SizeMismatch {
        /// Count maintained by insert and remove.
        recorded: usize,
        /// Nodes actually reachable from the root.
        counted: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InvariantViolation::RedRoot, "Root node is red")]
    #[case(
        InvariantViolation::ConsecutiveReds { depth: 3 },
        "Red node at depth 3 has a red child"
    )]
    #[case(
        InvariantViolation::OutOfOrder { depth: 0 },
        "Key at depth 0 breaks search-tree order"
    )]
    #[case(
        InvariantViolation::SizeMismatch { recorded: 4, counted: 3 },
        "Size mismatch: recorded 4, counted 3"
    )]
    fn test_invariant_violation_display(
        #[case] violation: InvariantViolation,
        #[case] expected: &str,
    ) {
        assert_eq!(violation.to_string(), expected);
    }

    #[rstest]
    fn test_invariant_violation_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(InvariantViolation::RedRoot);
        assert_eq!(error.to_string(), "Root node is red");
    }
}

//! Tree nodes and the rotation primitives shared by insertion and deletion.

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// An owned, possibly empty child slot.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Internal node structure for the red-black tree.
///
/// Each node exclusively owns its children, so the graph is a plain tree
/// with no parent references.
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) color: Color,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new red node with no children.
    pub(super) fn new_red(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    /// Checks if this node is red.
    pub(super) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Checks if this node is black.
    pub(super) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Consumes a detached node and returns its entry.
    pub(super) fn into_entry(self: Box<Self>) -> (K, V) {
        let node = *self;
        (node.key, node.value)
    }
}

/// Helper function to check if an optional node is red.
pub(super) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().is_some_and(|node| node.is_red())
}

/// Paints the node in `link`, if there is one.
pub(super) fn paint<K, V>(link: &mut Link<K, V>, color: Color) {
    if let Some(node) = link {
        node.color = color;
    }
}

// =============================================================================
// Rotations
// =============================================================================

/// Rotates the tree to the left around the given node.
///
/// The right child becomes the subtree root and its former left subtree is
/// re-hung as the old root's right subtree. Colors are left to the caller.
pub(super) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    pivot.left = Some(node);
    pivot
}

/// Rotates the tree to the right around the given node.
pub(super) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    pivot.right = Some(node);
    pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn black(key: i32, left: Link<i32, ()>, right: Link<i32, ()>) -> Link<i32, ()> {
        let mut node = Node::new_red(key, ());
        node.color = Color::Black;
        node.left = left;
        node.right = right;
        Some(node)
    }

    fn keys_preorder(link: &Link<i32, ()>, keys: &mut Vec<i32>) {
        if let Some(node) = link {
            keys.push(node.key);
            keys_preorder(&node.left, keys);
            keys_preorder(&node.right, keys);
        }
    }

    #[rstest]
    fn test_new_red_is_red_leaf() {
        let node = Node::new_red(1, "one");
        assert!(node.is_red());
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert_eq!(node.into_entry(), (1, "one"));
    }

    #[rstest]
    fn test_rotate_left_moves_three_links() {
        //     2              4
        //    / \            / \
        //   1   4    =>    2   5
        //      / \        / \
        //     3   5      1   3
        let tree = black(
            2,
            black(1, None, None),
            black(4, black(3, None, None), black(5, None, None)),
        );
        let rotated = Some(rotate_left(tree.unwrap()));

        let mut keys = Vec::new();
        keys_preorder(&rotated, &mut keys);
        assert_eq!(keys, vec![4, 2, 1, 3, 5]);
    }

    #[rstest]
    fn test_rotate_right_moves_three_links() {
        let tree = black(
            4,
            black(2, black(1, None, None), black(3, None, None)),
            black(5, None, None),
        );
        let rotated = Some(rotate_right(tree.unwrap()));

        let mut keys = Vec::new();
        keys_preorder(&rotated, &mut keys);
        assert_eq!(keys, vec![2, 1, 4, 3, 5]);
    }

    #[rstest]
    fn test_rotation_without_child_is_identity() {
        let node = black(1, None, None).unwrap();
        let node = rotate_left(node);
        let node = rotate_right(node);
        assert_eq!(node.key, 1);
        assert!(node.left.is_none() && node.right.is_none());
    }

    #[rstest]
    fn test_paint_and_is_red() {
        let mut link = black(7, None, None);
        assert!(!is_red(&link));
        paint(&mut link, Color::Red);
        assert!(is_red(&link));

        let mut empty: Link<i32, ()> = None;
        paint(&mut empty, Color::Red);
        assert!(!is_red(&empty));
    }
}

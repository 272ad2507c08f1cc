//! The balancing engine: insertion with red-red repair and deletion with
//! double-black repair.
//!
//! Both algorithms descend recursively from the root and repair on the way
//! back up, so no parent references are needed. Deletion reports a missing
//! unit of black height to its caller through [`BlackHeight`] instead of
//! marking the parent node.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use super::node::{Color, Link, Node, is_red, paint, rotate_left, rotate_right};

/// Whether a subtree handed back by a deletion step kept its black height.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum BlackHeight {
    /// The subtree has the same black height as before the step.
    Intact,
    /// The subtree is one black node short and its parent must repair it.
    Deficient,
}

/// Result of a deletion step: the new subtree, the removed entry if the key
/// was found, and the black-height signal for the parent.
pub(super) type Removal<K, V> = (Link<K, V>, Option<(K, V)>, BlackHeight);

const fn deficiency_of<K, V>(node: &Node<K, V>) -> BlackHeight {
    match node.color {
        Color::Black => BlackHeight::Deficient,
        Color::Red => BlackHeight::Intact,
    }
}

// =============================================================================
// Insertion
// =============================================================================

/// Inserts into the subtree at `link` and returns the new subtree root along
/// with the value that was replaced, if the key already existed.
///
/// The returned root may be red; the caller paints the tree root black.
pub(super) fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
    let Some(mut node) = link else {
        return (Node::new_red(key, value), None);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, replaced) = insert(node.left.take(), key, value);
            node.left = Some(left);
            (fix_red_violation(node), replaced)
        }
        Ordering::Greater => {
            let (right, replaced) = insert(node.right.take(), key, value);
            node.right = Some(right);
            (fix_red_violation(node), replaced)
        }
        Ordering::Equal => {
            let replaced = mem::replace(&mut node.value, value);
            (node, Some(replaced))
        }
    }
}

/// Resolves at most one red-red violation directly below a black node.
fn fix_red_violation<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if node.is_red() {
        return node;
    }

    let left_red = is_red(&node.left);
    let right_red = is_red(&node.right);
    let left_outer = left_red && node.left.as_ref().is_some_and(|left| is_red(&left.left));
    let left_inner = left_red && node.left.as_ref().is_some_and(|left| is_red(&left.right));
    let right_outer = right_red && node.right.as_ref().is_some_and(|right| is_red(&right.right));
    let right_inner = right_red && node.right.as_ref().is_some_and(|right| is_red(&right.left));

    if left_red && right_red && (left_outer || left_inner || right_outer || right_inner) {
        tracing::trace!(case = "push_down", "insertion fixup");
        node.color = Color::Red;
        paint(&mut node.left, Color::Black);
        paint(&mut node.right, Color::Black);
        node
    } else if left_outer {
        tracing::trace!(case = "left_left", "insertion fixup");
        node.color = Color::Red;
        paint(&mut node.left, Color::Black);
        rotate_right(node)
    } else if right_outer {
        tracing::trace!(case = "right_right", "insertion fixup");
        node.color = Color::Red;
        paint(&mut node.right, Color::Black);
        rotate_left(node)
    } else if left_inner {
        tracing::trace!(case = "left_right", "insertion fixup");
        node.color = Color::Red;
        if let Some(left) = node.left.as_mut() {
            paint(&mut left.right, Color::Black);
        }
        node.left = node.left.take().map(rotate_left);
        rotate_right(node)
    } else if right_inner {
        tracing::trace!(case = "right_left", "insertion fixup");
        node.color = Color::Red;
        if let Some(right) = node.right.as_mut() {
            paint(&mut right.left, Color::Black);
        }
        node.right = node.right.take().map(rotate_right);
        rotate_left(node)
    } else {
        node
    }
}

// =============================================================================
// Deletion
// =============================================================================

/// Removes `key` from the subtree rooted at `node`.
///
/// If the key is absent the subtree comes back unchanged and `Intact`.
pub(super) fn remove<K, V, Q>(mut node: Box<Node<K, V>>, key: &Q) -> Removal<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let Some(left) = node.left.take() else {
                return (Some(node), None, BlackHeight::Intact);
            };
            let (left, removed, height) = remove(left, key);
            node.left = left;
            let (node, height) = settle_left(node, height);
            (Some(node), removed, height)
        }
        Ordering::Greater => {
            let Some(right) = node.right.take() else {
                return (Some(node), None, BlackHeight::Intact);
            };
            let (right, removed, height) = remove(right, key);
            node.right = right;
            let (node, height) = settle_right(node, height);
            (Some(node), removed, height)
        }
        Ordering::Equal => splice(node),
    }
}

/// Unlinks a node whose key matched.
fn splice<K, V>(mut node: Box<Node<K, V>>) -> Removal<K, V> {
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            let height = deficiency_of(&node);
            (None, Some(node.into_entry()), height)
        }
        // A lone child of a black node is red; the parent's repair absorbs it.
        (Some(child), None) | (None, Some(child)) => {
            let height = deficiency_of(&node);
            (Some(child), Some(node.into_entry()), height)
        }
        (Some(left), Some(right)) => {
            let (right, (successor_key, successor_value), height) = remove_min(right);
            node.left = Some(left);
            node.right = right;
            let key = mem::replace(&mut node.key, successor_key);
            let value = mem::replace(&mut node.value, successor_value);
            let (node, height) = settle_right(node, height);
            (Some(node), Some((key, value)), height)
        }
    }
}

/// Removes the leftmost node of a subtree, i.e. the in-order successor of
/// the node that owns this subtree as its right child.
fn remove_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V), BlackHeight) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            let height = deficiency_of(&node);
            (right, node.into_entry(), height)
        }
        Some(left) => {
            let (left, entry, height) = remove_min(left);
            node.left = left;
            let (node, height) = settle_left(node, height);
            (Some(node), entry, height)
        }
    }
}

fn settle_left<K, V>(node: Box<Node<K, V>>, height: BlackHeight) -> (Box<Node<K, V>>, BlackHeight) {
    match height {
        BlackHeight::Intact => (node, BlackHeight::Intact),
        BlackHeight::Deficient => repair_left(node),
    }
}

fn settle_right<K, V>(node: Box<Node<K, V>>, height: BlackHeight) -> (Box<Node<K, V>>, BlackHeight) {
    match height {
        BlackHeight::Intact => (node, BlackHeight::Intact),
        BlackHeight::Deficient => repair_right(node),
    }
}

// =============================================================================
// Double-Black Repair
// =============================================================================

/// Repairs a parent whose left slot is one black node short.
pub(super) fn repair_left<K, V>(mut parent: Box<Node<K, V>>) -> (Box<Node<K, V>>, BlackHeight) {
    if let Some(left) = parent.left.as_mut().filter(|left| left.is_red()) {
        tracing::trace!(case = "absorb_red", side = "left", "deletion repair");
        left.color = Color::Black;
        return (parent, BlackHeight::Intact);
    }

    if is_red(&parent.right) {
        tracing::trace!(case = "red_sibling", side = "left", "deletion repair");
        parent.color = Color::Red;
        paint(&mut parent.right, Color::Black);
        let mut top = rotate_left(parent);
        let Some(lowered) = top.left.take() else {
            return (top, BlackHeight::Intact);
        };
        let (lowered, height) = repair_left_black_sibling(lowered);
        top.left = Some(lowered);
        return settle_left(top, height);
    }

    repair_left_black_sibling(parent)
}

fn repair_left_black_sibling<K, V>(mut parent: Box<Node<K, V>>) -> (Box<Node<K, V>>, BlackHeight) {
    let Some(sibling) = parent.right.as_ref() else {
        return (parent, BlackHeight::Intact);
    };
    let outer_red = is_red(&sibling.right);
    let inner_red = is_red(&sibling.left);
    let parent_color = parent.color;

    if outer_red {
        tracing::trace!(case = "outer_nephew", side = "left", "deletion repair");
        if let Some(sibling) = parent.right.as_mut() {
            sibling.color = parent_color;
            paint(&mut sibling.right, Color::Black);
        }
        parent.color = Color::Black;
        (rotate_left(parent), BlackHeight::Intact)
    } else if inner_red {
        tracing::trace!(case = "inner_nephew", side = "left", "deletion repair");
        parent.right = parent.right.take().map(rotate_right);
        parent.color = Color::Black;
        let mut top = rotate_left(parent);
        top.color = parent_color;
        (top, BlackHeight::Intact)
    } else if parent.is_red() {
        tracing::trace!(case = "red_parent", side = "left", "deletion repair");
        parent.color = Color::Black;
        paint(&mut parent.right, Color::Red);
        (parent, BlackHeight::Intact)
    } else {
        tracing::trace!(case = "propagate", side = "left", "deletion repair");
        paint(&mut parent.right, Color::Red);
        (parent, BlackHeight::Deficient)
    }
}

/// Repairs a parent whose right slot is one black node short.
pub(super) fn repair_right<K, V>(mut parent: Box<Node<K, V>>) -> (Box<Node<K, V>>, BlackHeight) {
    if let Some(right) = parent.right.as_mut().filter(|right| right.is_red()) {
        tracing::trace!(case = "absorb_red", side = "right", "deletion repair");
        right.color = Color::Black;
        return (parent, BlackHeight::Intact);
    }

    if is_red(&parent.left) {
        tracing::trace!(case = "red_sibling", side = "right", "deletion repair");
        parent.color = Color::Red;
        paint(&mut parent.left, Color::Black);
        let mut top = rotate_right(parent);
        let Some(lowered) = top.right.take() else {
            return (top, BlackHeight::Intact);
        };
        let (lowered, height) = repair_right_black_sibling(lowered);
        top.right = Some(lowered);
        return settle_right(top, height);
    }

    repair_right_black_sibling(parent)
}

fn repair_right_black_sibling<K, V>(mut parent: Box<Node<K, V>>) -> (Box<Node<K, V>>, BlackHeight) {
    let Some(sibling) = parent.left.as_ref() else {
        return (parent, BlackHeight::Intact);
    };
    let outer_red = is_red(&sibling.left);
    let inner_red = is_red(&sibling.right);
    let parent_color = parent.color;

    if outer_red {
        tracing::trace!(case = "outer_nephew", side = "right", "deletion repair");
        if let Some(sibling) = parent.left.as_mut() {
            sibling.color = parent_color;
            paint(&mut sibling.left, Color::Black);
        }
        parent.color = Color::Black;
        (rotate_right(parent), BlackHeight::Intact)
    } else if inner_red {
        tracing::trace!(case = "inner_nephew", side = "right", "deletion repair");
        parent.left = parent.left.take().map(rotate_left);
        parent.color = Color::Black;
        let mut top = rotate_right(parent);
        top.color = parent_color;
        (top, BlackHeight::Intact)
    } else if parent.is_red() {
        tracing::trace!(case = "red_parent", side = "right", "deletion repair");
        parent.color = Color::Black;
        paint(&mut parent.left, Color::Red);
        (parent, BlackHeight::Intact)
    } else {
        tracing::trace!(case = "propagate", side = "right", "deletion repair");
        paint(&mut parent.left, Color::Red);
        (parent, BlackHeight::Deficient)
    }
}

//! Tree nodes, height bookkeeping and the rotation primitives.
//!
//! Every node owns its children through a `Box`; there are no parent
//! pointers. All structural edits take a subtree by value and hand back the
//! (possibly new) owning handle, so ownership only ever moves and a node is
//! never reachable from two places at once.

use tracing::trace;

/// Owning link to a child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// =============================================================================
// Node Definition
// =============================================================================

/// A node of an [`AvlTree`](crate::AvlTree).
///
/// Nodes are only handed out as shared references through
/// [`AvlTree::root`](crate::AvlTree::root), which allows callers to inspect
/// the exact shape of the tree without being able to break its invariants.
///
/// # Examples
///
/// ```rust
/// use avlset::AvlTree;
///
/// let tree: AvlTree<i32> = [10, 20, 30].into();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.key(), &20);
/// assert_eq!(root.left().map(|node| *node.key()), Some(10));
/// assert_eq!(root.right().map(|node| *node.key()), Some(30));
/// assert_eq!(root.height(), 1);
/// assert_eq!(root.balance_factor(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Cached height of the subtree rooted here; a leaf has height 0.
    pub(crate) height: i32,
}

impl<T> Node<T> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Returns the key stored in this node.
    #[inline]
    pub const fn key(&self) -> &T {
        &self.key
    }

    /// Returns the left child, if any.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the cached height of the subtree rooted at this node.
    ///
    /// A leaf has height 0.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `height(left) - height(right)`, where an absent child counts
    /// as height -1.
    ///
    /// In a valid tree this is always one of -1, 0 or 1.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height_of(self.left()) - height_of(self.right())
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height_of(self.left()).max(height_of(self.right()));
    }
}

/// Height of an optional subtree; -1 when absent.
#[inline]
pub(crate) fn height_of<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |node| node.height)
}

// =============================================================================
// Rotations
// =============================================================================

/// Rotates the subtree right around `node`, promoting its left child.
///
/// The left child's right subtree is re-attached as `node`'s new left
/// subtree. Heights are refreshed bottom-up: `node` first, then the
/// promoted child. If `node` has no left child there is nothing to pivot on
/// and it is returned untouched.
pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut top) = node.left.take() else {
        return node;
    };
    node.left = top.right.take();
    node.update_height();
    top.right = Some(node);
    top.update_height();
    trace!(height = top.height, "rotated right");
    top
}

/// Rotates the subtree left around `node`, promoting its right child.
///
/// Mirror image of [`rotate_right`].
pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut top) = node.right.take() else {
        return node;
    };
    node.right = top.left.take();
    node.update_height();
    top.left = Some(node);
    top.update_height();
    trace!(height = top.height, "rotated left");
    top
}

/// Refreshes the height of `node` and restores the AVL balance at it.
///
/// Both children must already be valid AVL subtrees whose heights differ by
/// at most two. A right-heavy node whose right child leans left needs the
/// double (right-left) rotation; the left-heavy case is symmetric. At most
/// one single or double rotation is applied.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance < -1 {
        if node
            .right
            .as_ref()
            .is_some_and(|right| right.balance_factor() >= 1)
        {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else if balance > 1 {
        if node
            .left
            .as_ref()
            .is_some_and(|left| left.balance_factor() <= -1)
        {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else {
        node
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaf(key: i32) -> Box<Node<i32>> {
        Box::new(Node::leaf(key))
    }

    /// Builds an unbalanced node with the given children and a correct height.
    fn branch(key: i32, left: Link<i32>, right: Link<i32>) -> Box<Node<i32>> {
        let mut node = Box::new(Node {
            key,
            left,
            right,
            height: 0,
        });
        node.update_height();
        node
    }

    fn shape(node: &Node<i32>) -> (i32, Option<i32>, Option<i32>) {
        (
            node.key,
            node.left().map(|left| left.key),
            node.right().map(|right| right.key),
        )
    }

    #[rstest]
    fn test_leaf_has_height_zero() {
        let node = Node::leaf(5);
        assert_eq!(node.height(), 0);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.is_leaf());
    }

    #[rstest]
    fn test_height_of_absent_subtree_is_negative_one() {
        assert_eq!(height_of::<i32>(None), -1);
    }

    #[rstest]
    fn test_update_height_uses_taller_child() {
        let node = branch(10, Some(branch(5, Some(leaf(1)), None)), Some(leaf(20)));
        assert_eq!(node.height(), 2);
        assert_eq!(node.balance_factor(), 1);
    }

    #[rstest]
    fn test_rotate_right_promotes_left_child() {
        // 30 -> 20 -> 10 down the left spine, 25 hanging off 20
        let node = branch(30, Some(branch(20, Some(leaf(10)), Some(leaf(25)))), None);
        let rotated = rotate_right(node);

        assert_eq!(shape(&rotated), (20, Some(10), Some(30)));
        let moved = rotated.right().unwrap();
        assert_eq!(shape(moved), (30, Some(25), None));
        assert_eq!(moved.height(), 1);
        assert_eq!(rotated.height(), 2);
    }

    #[rstest]
    fn test_rotate_left_promotes_right_child() {
        let node = branch(10, None, Some(branch(20, Some(leaf(15)), Some(leaf(30)))));
        let rotated = rotate_left(node);

        assert_eq!(shape(&rotated), (20, Some(10), Some(30)));
        let moved = rotated.left().unwrap();
        assert_eq!(shape(moved), (10, None, Some(15)));
        assert_eq!(moved.height(), 1);
        assert_eq!(rotated.height(), 2);
    }

    #[rstest]
    fn test_rotate_without_pivot_is_identity() {
        let node = leaf(1);
        assert_eq!(rotate_right(node.clone()), node);
        assert_eq!(rotate_left(node.clone()), node);
    }

    #[rstest]
    #[case::right_right(branch(10, None, Some(branch(20, None, Some(leaf(30))))))]
    #[case::right_left(branch(10, None, Some(branch(30, Some(leaf(20)), None))))]
    #[case::left_left(branch(30, Some(branch(20, Some(leaf(10)), None)), None))]
    #[case::left_right(branch(30, Some(branch(10, None, Some(leaf(20)))), None))]
    fn test_rebalance_restores_perfect_triple(#[case] node: Box<Node<i32>>) {
        let balanced = rebalance(node);
        assert_eq!(shape(&balanced), (20, Some(10), Some(30)));
        assert_eq!(balanced.height(), 1);
        assert_eq!(balanced.balance_factor(), 0);
        assert!(balanced.left().unwrap().is_leaf());
        assert!(balanced.right().unwrap().is_leaf());
    }

    #[rstest]
    fn test_rebalance_leaves_balanced_node_alone() {
        let node = branch(20, Some(leaf(10)), None);
        let balanced = rebalance(node.clone());
        assert_eq!(balanced, node);
    }

    #[rstest]
    fn test_rebalance_right_heavy_with_even_child_uses_single_rotation() {
        // Only reachable after a removal: the right child has balance 0.
        let node = branch(
            10,
            None,
            Some(branch(20, Some(leaf(15)), Some(leaf(30)))),
        );
        let balanced = rebalance(node);

        assert_eq!(shape(&balanced), (20, Some(10), Some(30)));
        assert_eq!(balanced.height(), 2);
        assert_eq!(balanced.balance_factor(), 1);
        assert_eq!(shape(balanced.left().unwrap()), (10, None, Some(15)));
    }
}

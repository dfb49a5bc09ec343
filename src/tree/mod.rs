//! Owned, height-balanced (AVL) ordered set.
//!
//! This module provides [`AvlTree`], a binary search tree that keeps the
//! heights of the two subtrees of every node within one of each other.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) get / contains
//! - O(1) len, `is_empty` and height
//! - O(N) traversals (preorder, inorder, postorder, level order)
//!
//! Mutating operations recurse down to the target position, perform the
//! structural edit and then rebalance every ancestor while the recursion
//! unwinds. A single insertion needs at most one rotation (single or
//! double); a removal may need one at every level on the way back to the
//! root.
//!
//! # Examples
//!
//! ```rust
//! use avlset::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! // Ascending insertion triggered a left rotation at 10
//! assert_eq!(tree.root().map(|node| *node.key()), Some(20));
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.inorder(), vec![&10, &20, &30]);
//! ```
//!
//! # Invariants
//!
//! After every public operation, including failed ones:
//! 1. Every key in a left subtree is smaller, and every key in a right
//!    subtree larger, than the key of the node above it
//! 2. The heights of the two subtrees of every node differ by at most one
//! 3. Every cached height equals `1 + max(height(left), height(right))`,
//!    with an absent subtree counting as -1
//! 4. `len()` is the exact node count
//! 5. No key is stored twice

mod node;
mod traversal;

pub use node::Node;
pub use traversal::{AvlTreeIntoIterator, AvlTreeIterator};

use node::{Link, rebalance};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::debug;

use crate::error::{Result, TreeError, required};

// =============================================================================
// AvlTree Definition
// =============================================================================

/// An ordered set of unique keys backed by an AVL tree.
///
/// The tree exclusively owns all of its nodes. Equality is *structural*: two
/// trees are equal only if they have the same shape and equal keys at
/// corresponding positions, so two trees holding the same keys but built in
/// a different order may compare unequal.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(log N)   |
/// | `remove`     | O(log N)   |
/// | `get`        | O(log N)   |
/// | `contains`   | O(log N)   |
/// | `min`/`max`  | O(log N)   |
/// | `len`        | O(1)       |
/// | `height`     | O(1)       |
/// | `clear`      | O(N)       |
/// | traversals   | O(N)       |
///
/// # Examples
///
/// ```rust
/// use avlset::{AvlTree, TreeError};
///
/// let mut tree: AvlTree<i32> = [30, 20, 40, 10, 25, 35, 50].into();
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 2);
///
/// assert_eq!(tree.remove(&20), Ok(20));
/// assert_eq!(tree.remove(&20), Err(TreeError::NotFound));
/// assert!(!tree.contains(&20));
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of keys
    length: usize,
}

static_assertions::assert_impl_all!(AvlTree<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(AvlTree<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(AvlTree<std::rc::Rc<i32>>: Send, Sync);

impl<T> AvlTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree: AvlTree<i32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree: 0 for a single node, -1 when empty.
    ///
    /// # Complexity
    ///
    /// O(1); the height is cached in every node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        node::height_of(self.root())
    }

    /// Returns a read-only view of the root node, or `None` if the tree is
    /// empty.
    ///
    /// Useful for inspecting the exact shape produced by the balancing
    /// algorithm.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every key from the tree in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = (0..100).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// assert!(tree.inorder().is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(discarded = self.length, "clearing tree");
        self.root = None;
        self.length = 0;
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current.key())
    }

    /// Returns the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(current.key())
    }
}

impl<T: Ord> AvlTree<T> {
    /// Builds a tree by inserting `keys` one by one, in iteration order.
    ///
    /// Duplicate keys after the first occurrence are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree = AvlTree::from_keys(vec![3, 1, 2, 3]);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    /// ```
    #[must_use]
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }

    /// Builds a tree from a nullable sequence of nullable keys.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `keys` is `None` or any of
    /// its elements is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::{AvlTree, TreeError};
    ///
    /// let tree = AvlTree::try_from_keys(Some(vec![Some(2), Some(1)])).unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// let missing: Option<Vec<Option<i32>>> = None;
    /// assert_eq!(AvlTree::try_from_keys(missing), Err(TreeError::InvalidArgument));
    /// assert_eq!(
    ///     AvlTree::try_from_keys(Some(vec![Some(1), None])),
    ///     Err(TreeError::InvalidArgument)
    /// );
    /// ```
    pub fn try_from_keys<I>(keys: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut tree = Self::new();
        for key in required(keys)? {
            tree.insert(required(key)?);
        }
        Ok(tree)
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts a key into the tree.
    ///
    /// Returns `true` if the key was added. If an equal key is already
    /// stored, the tree is left untouched (the stored instance is kept) and
    /// `false` is returned.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let (root, inserted) = Self::insert_into(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.length += 1;
        }
        inserted
    }

    /// Inserts a nullable key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `key` is `None`; the tree is
    /// not modified.
    pub fn try_insert(&mut self, key: Option<T>) -> Result<bool> {
        Ok(self.insert(required(key)?))
    }

    /// Recursive helper for insert.
    /// Returns (`new_subtree_root`, `was_inserted`).
    fn insert_into(link: Link<T>, key: T) -> (Box<Node<T>>, bool) {
        let Some(mut node) = link else {
            return (Box::new(Node::leaf(key)), true);
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert_into(node.left.take(), key);
                node.left = Some(left);
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_into(node.right.take(), key);
                node.right = Some(right);
                inserted
            }
            Ordering::Equal => false,
        };

        if inserted {
            (rebalance(node), true)
        } else {
            (node, false)
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes a key from the tree and returns the stored instance.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no equal key is stored (including
    /// when the tree is empty). The tree is not modified.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::{AvlTree, TreeError};
    ///
    /// let mut tree: AvlTree<String> = ["b", "a", "c"].map(String::from).into();
    /// assert_eq!(tree.remove("b"), Ok("b".to_string()));
    /// assert_eq!(tree.remove("b"), Err(TreeError::NotFound));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(TreeError::NotFound);
        }

        let (root, removed) = Self::remove_from(self.root.take(), key);
        self.root = root;
        let removed = removed.ok_or(TreeError::NotFound)?;
        self.length -= 1;
        Ok(removed)
    }

    /// Removes a nullable key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `key` is `None`, otherwise
    /// behaves like [`remove`](Self::remove).
    pub fn try_remove<Q>(&mut self, key: Option<&Q>) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(required(key)?)
    }

    /// Recursive helper for remove.
    /// Returns (`new_subtree_root`, `removed_key`); a subtree in which
    /// nothing was removed comes back untouched.
    fn remove_from<Q>(link: Link<T>, key: &Q) -> (Link<T>, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = link else {
            return (None, None);
        };

        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let (left, removed) = Self::remove_from(node.left.take(), key);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_from(node.right.take(), key);
                node.right = right;
                removed
            }
            Ordering::Equal => {
                let (replacement, removed) = Self::unlink(node);
                return (replacement, Some(removed));
            }
        };

        if removed.is_some() {
            (Some(rebalance(node)), removed)
        } else {
            (Some(node), None)
        }
    }

    /// Detaches `node` from the tree and returns what takes its place
    /// together with its key.
    fn unlink(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match (node.left.take(), node.right.take()) {
            (None, None) => (None, node.key),
            (Some(child), None) | (None, Some(child)) => (Some(child), node.key),
            (Some(left), Some(right)) => {
                let (right, successor) = Self::take_min(right);
                node.left = Some(left);
                node.right = right;
                let removed = mem::replace(&mut node.key, successor);
                (Some(rebalance(node)), removed)
            }
        }
    }

    /// Splices the leftmost node out of the subtree and returns its key.
    ///
    /// The leftmost node has no left child; its right child (if any) takes
    /// its place. Every node on the way down is rebalanced on the way back.
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { key, right, .. } = *node;
                (right, key)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(rebalance(node)), min)
            }
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns a reference to the stored key equal to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no equal key is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::{AvlTree, TreeError};
    ///
    /// let tree: AvlTree<String> = ["hello".to_string()].into();
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(tree.get("hello"), Ok(&"hello".to_string()));
    /// assert_eq!(tree.get("world"), Err(TreeError::NotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find(self.root(), key).ok_or(TreeError::NotFound)
    }

    /// Looks up a nullable key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `key` is `None`, otherwise
    /// behaves like [`get`](Self::get).
    pub fn try_get<Q>(&self, key: Option<&Q>) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(required(key)?)
    }

    /// Returns `true` if the tree stores a key equal to `key`.
    ///
    /// Absence is reported as `false`, never as an error.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find(self.root(), key).is_some()
    }

    /// Checks membership of a nullable key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `key` is `None`.
    pub fn try_contains<Q>(&self, key: Option<&Q>) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Ok(self.contains(required(key)?))
    }

    /// Recursive helper for lookup.
    fn find<'a, Q>(node: Option<&'a Node<T>>, key: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match key.cmp(node_ref.key.borrow()) {
            Ordering::Less => Self::find(node_ref.left(), key),
            Ordering::Greater => Self::find(node_ref.right(), key),
            Ordering::Equal => Some(&node_ref.key),
        })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for AvlTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlTree<T> {
    fn from(keys: [T; N]) -> Self {
        Self::from_keys(keys)
    }
}

/// Structural equality: same shape and equal keys at every position.
impl<T: PartialEq> PartialEq for AvlTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.root == other.root
    }
}

impl<T: Eq> Eq for AvlTree<T> {}

/// Hashes the length followed by the node structure, consistent with the
/// structural [`PartialEq`].
impl<T: Hash> Hash for AvlTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.root.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

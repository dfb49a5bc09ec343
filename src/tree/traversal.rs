//! Depth-first and breadth-first traversals of an [`AvlTree`].
//!
//! Every traversal eagerly collects references to the keys into a `Vec`.
//! The depth-first orders recurse (the call stack carries the path, whose
//! length is bounded by the tree height); level order drives an explicit
//! FIFO queue.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::AvlTree;
use super::node::{Link, Node};

impl<T> AvlTree<T> {
    /// Returns the keys in preorder: node, left subtree, right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [10, 20, 30, 40].into();
    /// assert_eq!(tree.preorder(), vec![&20, &10, &30, &40]);
    /// ```
    #[must_use]
    pub fn preorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.length);
        collect_preorder(self.root(), &mut keys);
        keys
    }

    /// Returns the keys in inorder: left subtree, node, right subtree.
    ///
    /// The result is always sorted in ascending order.
    #[must_use]
    pub fn inorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.length);
        collect_inorder(self.root(), &mut keys);
        keys
    }

    /// Returns the keys in postorder: left subtree, right subtree, node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [10, 20, 30, 40].into();
    /// assert_eq!(tree.postorder(), vec![&10, &40, &30, &20]);
    /// ```
    #[must_use]
    pub fn postorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.length);
        collect_postorder(self.root(), &mut keys);
        keys
    }

    /// Returns the keys level by level from the root, left to right within
    /// each level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [10, 20, 30, 40].into();
    /// assert_eq!(tree.levelorder(), vec![&20, &10, &30, &40]);
    /// ```
    #[must_use]
    pub fn levelorder(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.length);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            keys.push(node.key());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        keys
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlset::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [3, 1, 2].into();
    /// let keys: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> AvlTreeIterator<'_, T> {
        AvlTreeIterator {
            keys: self.inorder(),
            current_index: 0,
        }
    }
}

fn collect_preorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node_ref) = node {
        keys.push(node_ref.key());
        collect_preorder(node_ref.left(), keys);
        collect_preorder(node_ref.right(), keys);
    }
}

fn collect_inorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node_ref) = node {
        collect_inorder(node_ref.left(), keys);
        keys.push(node_ref.key());
        collect_inorder(node_ref.right(), keys);
    }
}

fn collect_postorder<'a, T>(node: Option<&'a Node<T>>, keys: &mut Vec<&'a T>) {
    if let Some(node_ref) = node {
        collect_postorder(node_ref.left(), keys);
        collect_postorder(node_ref.right(), keys);
        keys.push(node_ref.key());
    }
}

/// Moves every key out of the subtree, in ascending order.
fn drain_inorder<T>(link: Link<T>, keys: &mut Vec<T>) {
    if let Some(node) = link {
        let Node {
            key, left, right, ..
        } = *node;
        drain_inorder(left, keys);
        keys.push(key);
        drain_inorder(right, keys);
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the keys of an [`AvlTree`] in ascending order.
pub struct AvlTreeIterator<'a, T> {
    keys: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for AvlTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.get(self.current_index).copied()?;
        self.current_index += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for AvlTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.keys.len().saturating_sub(self.current_index)
    }
}

impl<T> FusedIterator for AvlTreeIterator<'_, T> {}

/// An owning iterator over the keys of an [`AvlTree`] in ascending order.
pub struct AvlTreeIntoIterator<T> {
    keys: std::vec::IntoIter<T>,
}

impl<T> Iterator for AvlTreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> ExactSizeIterator for AvlTreeIntoIterator<T> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<T> FusedIterator for AvlTreeIntoIterator<T> {}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = AvlTreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut keys = Vec::with_capacity(self.length);
        drain_inorder(self.root, &mut keys);
        AvlTreeIntoIterator {
            keys: keys.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = AvlTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// ```text
    ///            30
    ///       20        40
    ///     10  25    35  50
    /// ```
    #[fixture]
    fn perfect_tree() -> AvlTree<i32> {
        [30, 20, 40, 10, 25, 35, 50].into()
    }

    #[rstest]
    fn test_preorder(perfect_tree: AvlTree<i32>) {
        assert_eq!(
            perfect_tree.preorder(),
            vec![&30, &20, &10, &25, &40, &35, &50]
        );
    }

    #[rstest]
    fn test_inorder(perfect_tree: AvlTree<i32>) {
        assert_eq!(
            perfect_tree.inorder(),
            vec![&10, &20, &25, &30, &35, &40, &50]
        );
    }

    #[rstest]
    fn test_postorder(perfect_tree: AvlTree<i32>) {
        assert_eq!(
            perfect_tree.postorder(),
            vec![&10, &25, &20, &35, &50, &40, &30]
        );
    }

    #[rstest]
    fn test_levelorder(perfect_tree: AvlTree<i32>) {
        assert_eq!(
            perfect_tree.levelorder(),
            vec![&30, &20, &40, &10, &25, &35, &50]
        );
    }

    #[rstest]
    fn test_traversals_of_empty_tree() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert!(tree.preorder().is_empty());
        assert!(tree.inorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert!(tree.levelorder().is_empty());
        assert_eq!(tree.iter().next(), None);
    }

    #[rstest]
    fn test_iter_is_exact_size(perfect_tree: AvlTree<i32>) {
        let mut iterator = perfect_tree.iter();
        assert_eq!(iterator.len(), 7);
        iterator.next();
        assert_eq!(iterator.len(), 6);
        assert_eq!(iterator.size_hint(), (6, Some(6)));
    }

    #[rstest]
    fn test_into_iter_yields_owned_keys_in_order() {
        let tree: AvlTree<String> = ["pear", "apple", "fig"].map(String::from).into();
        let keys: Vec<String> = tree.into_iter().collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);
    }

    #[rstest]
    fn test_borrowed_into_iter(perfect_tree: AvlTree<i32>) {
        let mut total = 0;
        for key in &perfect_tree {
            total += key;
        }
        assert_eq!(total, 210);
    }
}

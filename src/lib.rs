//! # avlset
//!
//! An owned, height-balanced binary search tree (AVL tree) storing an
//! ordered set of unique keys.
//!
//! ## Overview
//!
//! [`AvlTree`] keeps the heights of the two subtrees of every node within
//! one of each other by applying single or double rotations after every
//! insertion and removal. This bounds the height at roughly `1.44 log2(n)`,
//! so lookups, insertions and removals run in O(log n).
//!
//! - **Mutation**: [`insert`](AvlTree::insert), [`remove`](AvlTree::remove),
//!   [`clear`](AvlTree::clear)
//! - **Queries**: [`get`](AvlTree::get), [`contains`](AvlTree::contains),
//!   [`len`](AvlTree::len), [`height`](AvlTree::height)
//! - **Traversals**: [`preorder`](AvlTree::preorder),
//!   [`inorder`](AvlTree::inorder), [`postorder`](AvlTree::postorder),
//!   [`levelorder`](AvlTree::levelorder)
//! - **Shape inspection**: [`root`](AvlTree::root) and [`Node`]
//!
//! Equality between trees is structural: same shape, equal keys at every
//! position.
//!
//! ## Example
//!
//! ```rust
//! use avlset::prelude::*;
//!
//! let mut tree: AvlTree<i32> = [10, 20, 30, 40, 50, 25].into();
//! assert_eq!(tree.levelorder(), vec![&30, &20, &40, &10, &25, &50]);
//!
//! // Two children: the in-order successor 40 takes 30's place
//! assert_eq!(tree.remove(&30), Ok(30));
//! assert_eq!(tree.root().map(|node| *node.key()), Some(40));
//! assert_eq!(tree.remove(&30), Err(TreeError::NotFound));
//! ```
//!
//! ## Logging
//!
//! Rotations and clears emit [`tracing`] events at `TRACE` and `DEBUG`
//! level. The crate never installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use avlset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TreeError};
    pub use crate::tree::{AvlTree, Node};
}

pub mod error;
pub mod tree;

pub use error::{Result, TreeError};
pub use tree::{AvlTree, AvlTreeIntoIterator, AvlTreeIterator, Node};

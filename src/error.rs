//! Error types for tree operations.
//!
//! Every fallible operation on [`AvlTree`](crate::AvlTree) reports one of
//! two failure kinds. A failed call never mutates the tree: the state before
//! and after the call is identical.

use std::error::Error;
use std::fmt;

/// Errors that can occur when operating on an [`AvlTree`](crate::AvlTree).
///
/// # Examples
///
/// ```rust
/// use avlset::{AvlTree, TreeError};
///
/// let mut tree: AvlTree<i32> = AvlTree::new();
/// assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
/// assert_eq!(tree.try_insert(None), Err(TreeError::InvalidArgument));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// An absent key was supplied, or a construction sequence that is itself
    /// absent or contains an absent element.
    InvalidArgument,

    /// The requested key is not stored in the tree.
    ///
    /// Any lookup or removal against an empty tree reports this as well.
    NotFound,
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => {
                write!(formatter, "invalid argument: absent keys cannot be stored in the tree")
            }
            Self::NotFound => write!(formatter, "key not found in the tree"),
        }
    }
}

impl Error for TreeError {}

/// Result alias for tree operations.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Unwraps a nullable key, rejecting `None` with [`TreeError::InvalidArgument`].
pub(crate) fn required<K>(key: Option<K>) -> Result<K> {
    key.ok_or(TreeError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TreeError::InvalidArgument, "invalid argument: absent keys cannot be stored in the tree")]
    #[case(TreeError::NotFound, "key not found in the tree")]
    fn test_tree_error_display(#[case] error: TreeError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_tree_error_is_std_error() {
        let error: Box<dyn Error> = Box::new(TreeError::NotFound);
        assert_eq!(error.to_string(), "key not found in the tree");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_required_accepts_present_key() {
        assert_eq!(required(Some(7)), Ok(7));
    }

    #[rstest]
    fn test_required_rejects_absent_key() {
        assert_eq!(required::<i32>(None), Err(TreeError::InvalidArgument));
    }
}

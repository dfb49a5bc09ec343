//! Shared helpers for the integration tests.

#![allow(dead_code)]

use avlset::{AvlTree, Node};

/// Summary of a structurally validated subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtreeReport {
    pub height: i32,
    pub count: usize,
}

/// Checks ordering, balance, cached heights and node count of the whole
/// tree, panicking with a descriptive message on the first violation.
pub fn assert_invariants<T: Ord + std::fmt::Debug>(tree: &AvlTree<T>) {
    let report = check_subtree(tree.root(), None, None);
    assert_eq!(report.height, tree.height(), "root height mismatch");
    assert_eq!(report.count, tree.len(), "length does not match node count");
    assert_eq!(tree.is_empty(), tree.root().is_none());
}

fn check_subtree<T: Ord + std::fmt::Debug>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> SubtreeReport {
    let Some(node) = node else {
        return SubtreeReport {
            height: -1,
            count: 0,
        };
    };

    if let Some(lower) = lower {
        assert!(lower < node.key(), "{:?} is not above {lower:?}", node.key());
    }
    if let Some(upper) = upper {
        assert!(node.key() < upper, "{:?} is not below {upper:?}", node.key());
    }

    let left = check_subtree(node.left(), lower, Some(node.key()));
    let right = check_subtree(node.right(), Some(node.key()), upper);

    assert!(
        (left.height - right.height).abs() <= 1,
        "node {:?} is out of balance ({} vs {})",
        node.key(),
        left.height,
        right.height
    );
    assert_eq!(
        node.height(),
        1 + left.height.max(right.height),
        "stale height at {:?}",
        node.key()
    );
    assert_eq!(node.balance_factor(), left.height - right.height);

    SubtreeReport {
        height: node.height(),
        count: left.count + right.count + 1,
    }
}

/// Worst-case AVL height for `count` nodes.
#[allow(clippy::cast_precision_loss)]
pub fn height_bound(count: usize) -> f64 {
    1.44 * ((count + 2) as f64).log2() - 0.328
}

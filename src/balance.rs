use std::ops::ControlFlow;

use crate::{frame::fold_post_order, node::Node};

/// Selects the algorithm used to verify the height-balance of a tree.
///
/// Both algorithms always agree - they differ only in whether the native call
/// stack is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BalanceCheck {
    /// A recursive post-order walk, short-circuiting on the first unbalanced
    /// subtree. Limited by the depth of the call stack.
    Recursive,

    /// The same walk driven by explicit stack frames, able to check trees of
    /// any depth.
    #[default]
    Iterative,
}

impl BalanceCheck {
    pub(crate) fn check<T>(self, root: Option<&Node<T>>) -> bool {
        match self {
            Self::Recursive => is_balanced_recursive(root),
            Self::Iterative => is_balanced_iterative(root),
        }
    }
}

/// Returns true if, for every node in the subtree, the heights of the left and
/// right subtrees differ by at most 1.
pub(crate) fn is_balanced_recursive<T>(root: Option<&Node<T>>) -> bool {
    checked_height(root).is_some()
}

/// Returns the number of levels in the subtree rooted at `n` (0 for an empty
/// subtree), or [`None`] if any node in it is unbalanced.
fn checked_height<T>(n: Option<&Node<T>>) -> Option<usize> {
    let Some(n) = n else {
        return Some(0);
    };

    // An unbalanced left subtree stops the walk before the right is visited.
    let left = checked_height(n.left())?;
    let right = checked_height(n.right())?;

    if left.abs_diff(right) > 1 {
        return None;
    }

    Some(left.max(right) + 1)
}

/// The iterative equivalent of [`is_balanced_recursive()`].
///
/// Heights here count edges, so a leaf is 0 and a missing child is -1. The
/// difference between sibling heights is identical under either convention.
pub(crate) fn is_balanced_iterative<T>(root: Option<&Node<T>>) -> bool {
    fold_post_order(root, -1_isize, |_n, left, right| {
        if left.abs_diff(right) > 1 {
            // Abort the whole walk.
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(left.max(right) + 1)
    })
    .is_continue()
}

use std::{cmp::Ordering, fmt::Debug};

use crate::{node::Node, Compare, Tree};

/// Assert that the heights of the left and right subtrees of every node in
/// the subtree rooted at `root` differ by at most 1.
///
/// Independent of the balance checks under test, using only
/// [`Node::height()`].
pub(crate) fn assert_balanced_shape<T>(root: &Node<T>) {
    let height = |n: Option<&Node<T>>| n.map(|v| v.height() as isize).unwrap_or(-1);

    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        let (left, right) = (height(n.left()), height(n.right()));
        assert!(
            left.abs_diff(right) <= 1,
            "unbalanced node with subtree heights {left} and {right}"
        );

        stack.extend(n.children());
    }
}

/// Assert the ordering invariants of the tree hold for every node.
///
/// Every value in a left subtree must be strictly less than the subtree root,
/// and every value in a right subtree strictly greater, which also rules out
/// duplicates.
pub(crate) fn validate_tree_structure<T>(t: &Tree<T>)
where
    T: Compare + Debug,
{
    let Some(root) = t.root() else {
        return;
    };

    // Each node is visited with the exclusive (lower, upper) bounds imposed on
    // it by its ancestors.
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = vec![(root, None, None)];
    while let Some((n, lower, upper)) = stack.pop() {
        if let Some(lower) = lower {
            assert_eq!(
                n.value().compare(lower).unwrap(),
                Ordering::Greater,
                "{:?} must be greater than ancestor {:?}",
                n.value(),
                lower
            );
        }
        if let Some(upper) = upper {
            assert_eq!(
                n.value().compare(upper).unwrap(),
                Ordering::Less,
                "{:?} must be less than ancestor {:?}",
                n.value(),
                upper
            );
        }

        if let Some(left) = n.left() {
            stack.push((left, lower, Some(n.value())));
        }
        if let Some(right) = n.right() {
            stack.push((right, Some(n.value()), upper));
        }
    }

    // An in-order walk must be strictly ascending.
    let values = t.iter().collect::<Vec<_>>();
    for pair in values.windows(2) {
        assert_eq!(pair[0].compare(pair[1]).unwrap(), Ordering::Less);
    }
}

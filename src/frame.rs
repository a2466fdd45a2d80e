//! Post-order accumulation over a subtree without native recursion.
//!
//! A recursive post-order fold keeps two pieces of state per call: whether
//! the children have been evaluated yet, and the values they returned. Here
//! that state is held in explicit [`Frame`]s on a heap-allocated stack:
//!
//! ```text
//!   pop unvisited frame  --> mark visited, push it back, then push the
//!                            right and left child frames pointing at it
//!
//!   pop visited frame    --> combine(node, left, right) and write the
//!                            result into the parent frame's slot
//! ```
//!
//! A child frame always sits above its parent on the stack, so the parent's
//! index stays valid until the child has been folded.

use std::ops::ControlFlow;

use crate::node::Node;

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

#[derive(Debug)]
struct Frame<'a, T, A> {
    node: &'a Node<T>,
    visited: bool,

    /// The stack index of the parent frame and which of its children this
    /// frame is, or [`None`] for the subtree root.
    parent: Option<(usize, Side)>,

    /// Accumulated child results, initialised to the empty-subtree value.
    left: A,
    right: A,
}

impl<'a, T, A> Frame<'a, T, A>
where
    A: Clone,
{
    fn new(node: &'a Node<T>, parent: Option<(usize, Side)>, empty: &A) -> Self {
        Self {
            node,
            visited: false,
            parent,
            left: empty.clone(),
            right: empty.clone(),
        }
    }
}

/// Fold the subtree rooted at `root` in post-order.
///
/// Missing children contribute `empty`. For each node, `combine` receives the
/// node and its left and right accumulated values and either continues with
/// the node's value, or breaks to abort the entire walk immediately.
pub(crate) fn fold_post_order<'a, T, A, B, F>(
    root: Option<&'a Node<T>>,
    empty: A,
    mut combine: F,
) -> ControlFlow<B, A>
where
    A: Clone,
    F: FnMut(&'a Node<T>, A, A) -> ControlFlow<B, A>,
{
    let Some(root) = root else {
        return ControlFlow::Continue(empty);
    };

    let mut stack = vec![Frame::new(root, None, &empty)];
    while let Some(mut frame) = stack.pop() {
        if !frame.visited {
            frame.visited = true;

            let node = frame.node;
            let index = stack.len();
            stack.push(frame);

            // Right then left, so the left subtree is folded first.
            if let Some(right) = node.right() {
                stack.push(Frame::new(right, Some((index, Side::Right)), &empty));
            }
            if let Some(left) = node.left() {
                stack.push(Frame::new(left, Some((index, Side::Left)), &empty));
            }
            continue;
        }

        let acc = match combine(frame.node, frame.left, frame.right) {
            ControlFlow::Continue(v) => v,
            ControlFlow::Break(v) => return ControlFlow::Break(v),
        };

        match frame.parent {
            Some((index, Side::Left)) => stack[index].left = acc,
            Some((index, Side::Right)) => stack[index].right = acc,
            None => return ControlFlow::Continue(acc),
        }
    }

    // The root frame is always the last to be folded.
    ControlFlow::Continue(empty)
}

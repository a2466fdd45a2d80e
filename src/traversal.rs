use std::{collections::VecDeque, fmt::Display, str::FromStr};

use crate::{node::Node, Error};

/// A single instruction in a depth-first push sequence.
///
/// When a node is expanded, each step of the sequence is pushed onto a LIFO
/// stack in turn - so the visit order is the reverse of the push order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Push the left child, if any.
    Left,
    /// Push a call of the visitor for the node itself.
    Call,
    /// Push the right child, if any.
    Right,
}

/// The order in which a traversal visits the nodes of a tree.
///
/// Parsed from `level`, `pre`, `in` and `post` (optionally suffixed with
/// `-order`).
///
/// ```
/// use rebuildable_bst::{Order, Step};
///
/// let order = "in-order".parse::<Order>().unwrap();
/// assert_eq!(order, Order::In);
/// assert_eq!(order.push_order(), Some([Step::Right, Step::Call, Step::Left]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first, top to bottom and left to right within a level.
    Level,
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree (ascending).
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

pub(crate) const PRE_ORDER: [Step; 3] = [Step::Right, Step::Left, Step::Call];
pub(crate) const IN_ORDER: [Step; 3] = [Step::Right, Step::Call, Step::Left];
pub(crate) const POST_ORDER: [Step; 3] = [Step::Call, Step::Right, Step::Left];

impl Order {
    /// The depth-first push sequence producing this order, or [`None`] for the
    /// breadth-first [`Order::Level`].
    pub fn push_order(self) -> Option<[Step; 3]> {
        match self {
            Self::Level => None,
            Self::Pre => Some(PRE_ORDER),
            Self::In => Some(IN_ORDER),
            Self::Post => Some(POST_ORDER),
        }
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches("-order") {
            "level" => Ok(Self::Level),
            "pre" => Ok(Self::Pre),
            "in" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(Error::InvalidArgument(format!(
                "unknown traversal order \"{s}\""
            ))),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Level => "level-order",
            Self::Pre => "pre-order",
            Self::In => "in-order",
            Self::Post => "post-order",
        };
        f.write_str(s)
    }
}

/// Reject push sequences that would not visit every node exactly once.
pub(crate) fn validate(push_order: &[Step; 3]) -> Result<(), Error> {
    for step in [Step::Left, Step::Call, Step::Right] {
        if !push_order.contains(&step) {
            return Err(Error::InvalidArgument(format!(
                "push order {push_order:?} is missing {step:?}"
            )));
        }
    }

    Ok(())
}

/// Visit every node in the subtree in breadth-first order.
pub(crate) fn level_order<'a, T, F>(root: Option<&'a Node<T>>, mut f: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut queue = root.into_iter().collect::<VecDeque<_>>();

    while let Some(n) = queue.pop_front() {
        queue.extend(n.children());
        f(n);
    }
}

#[derive(Debug)]
enum Entry<'a, T> {
    /// A node to expand according to the push sequence.
    Expand(&'a Node<T>),
    /// A node to hand to the visitor.
    Call(&'a Node<T>),
}

/// Visit every node in the subtree in the depth-first order described by
/// `push_order`, using an explicit stack.
///
/// `push_order` must have been checked by [`validate()`].
pub(crate) fn depth_first<'a, T, F>(root: Option<&'a Node<T>>, push_order: [Step; 3], mut f: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut stack = root.map(Entry::Expand).into_iter().collect::<Vec<_>>();

    while let Some(entry) = stack.pop() {
        let n = match entry {
            Entry::Call(n) => {
                f(n);
                continue;
            }
            Entry::Expand(n) => n,
        };

        for step in push_order {
            match step {
                Step::Left => stack.extend(n.left().map(Entry::Expand)),
                Step::Call => stack.push(Entry::Call(n)),
                Step::Right => stack.extend(n.right().map(Entry::Expand)),
            }
        }
    }
}

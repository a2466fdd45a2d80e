use std::{cmp::Ordering, collections::VecDeque};

use crate::{Compare, Error};

/// An owned child pointer.
///
/// Empty slots are the attachment points for new nodes.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of a [`Tree`](crate::Tree), holding one value and owning its
/// left and right subtrees.
///
/// No parent pointers are kept - a node is reachable only through the slot
/// that owns it.
#[derive(Debug)]
pub struct Node<T> {
    /// Child nodes pointers.
    left: Link<T>,
    right: Link<T>,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    ///
    /// A leaf has a height of 0.
    ///
    /// Computed with a breadth-first walk of the subtree, so the cost is
    /// linear in the subtree size and independent of the call stack.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut queue = VecDeque::from([(0, self)]);

        while let Some((distance, n)) = queue.pop_front() {
            max = max.max(distance);
            queue.extend(n.children().map(|v| (distance + 1, v)));
        }

        max
    }

    /// The left then right children that exist.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Split borrows of the (left, right) child slots.
    pub(crate) fn slots_mut(&mut self) -> (&mut Link<T>, &mut Link<T>) {
        (&mut self.left, &mut self.right)
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// Overwrite the value held in this node, returning the old value.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// Descend from `slot` following `value`, returning the slot that either holds
/// the node equal to `value`, or the empty slot where it would be attached.
pub(crate) fn locate<'a, T>(
    mut slot: &'a mut Link<T>,
    value: &T,
) -> Result<&'a mut Link<T>, Error>
where
    T: Compare,
{
    loop {
        let ord = match slot.as_deref() {
            Some(n) => value.compare(n.value())?,
            None => return Ok(slot),
        };

        slot = match (ord, slot) {
            (Ordering::Less, Some(n)) => &mut n.left,
            (Ordering::Greater, Some(n)) => &mut n.right,
            (_, slot) => return Ok(slot),
        };
    }
}

/// Shared-reference search for the node holding `value`.
pub(crate) fn find<'a, T>(
    root: Option<&'a Node<T>>,
    value: &T,
) -> Result<Option<&'a Node<T>>, Error>
where
    T: Compare,
{
    let mut ptr = root;
    while let Some(n) = ptr {
        ptr = match value.compare(n.value())? {
            Ordering::Less => n.left(),
            Ordering::Equal => return Ok(Some(n)),
            Ordering::Greater => n.right(),
        };
    }

    Ok(None)
}

/// Unlink the node holding the minimum value of the subtree in `slot`,
/// splicing its right subtree (if any) into its place.
///
/// The minimum node never has a left child, so the removal is always a 0 or
/// 1 child splice.
pub(crate) fn extract_subtree_min<T>(mut slot: &mut Link<T>) -> Link<T> {
    // Descend the left-most edge.
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }

    let mut min = slot.take()?;
    debug_assert!(min.left.is_none());

    *slot = min.take_right();
    Some(min)
}

/// Free the nodes in `pending` and all their descendants without recursion.
///
/// Dropping a [`Box<Node>`] directly recurses once per level, which overflows
/// the call stack for long, list-shaped trees.
pub(crate) fn free<T>(mut pending: Vec<Box<Node<T>>>) {
    while let Some(mut n) = pending.pop() {
        pending.extend(n.take_left());
        pending.extend(n.take_right());
    }
}

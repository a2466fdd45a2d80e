use std::iter::FusedIterator;

use crate::node::Node;

/// A borrowing iterator over the values of a [`Tree`](crate::Tree) in
/// ascending order.
///
/// Holds the ancestors still to be yielded, plus a cursor to the subtree
/// whose left spine has not yet been walked.
#[derive(Debug)]
pub struct Iter<'a, T> {
    pending: Vec<&'a Node<T>>,
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            pending: vec![],
            cursor: root,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(n) = self.cursor {
            self.pending.push(n);
            self.cursor = n.left();
        }

        let n = self.pending.pop()?;
        self.cursor = n.right();

        Some(n.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

use crate::node::{free, Link, Node};

/// An iterator of owned values in ascending order, consuming the
/// [`Tree`](crate::Tree) it was created from.
///
/// Nodes are freed as they are yielded, and any nodes not yet yielded are
/// freed without recursion when the iterator is dropped.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<T>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_value())
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        free(std::mem::take(&mut self.stack));
    }
}

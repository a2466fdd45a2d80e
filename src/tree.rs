use std::{cmp::Ordering, convert::Infallible, ops::ControlFlow};

use tracing::{debug, trace};

use crate::{
    balance::BalanceCheck,
    builder::{build_sorted, sort_dedup},
    frame::fold_post_order,
    iter::{IntoIter, Iter},
    node::{self, extract_subtree_min, free, locate, Link, Node},
    traversal::{self, Order, Step, IN_ORDER, POST_ORDER, PRE_ORDER},
    Compare, Error,
};

/// An ordered binary search tree of unique values.
///
/// Insertion and deletion never restructure the tree, so repeated inserts of
/// ascending values degrade it into a list. Call [`Tree::rebalance()`] to
/// rebuild it into a height-balanced shape.
///
/// Every traversal, query and rebuild is stack-safe regardless of the tree's
/// depth, with the exception of [`Tree::is_balanced_recursive()`].
///
/// ```
/// use rebuildable_bst::Tree;
///
/// let mut tree = Tree::build([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324])?;
/// assert!(tree.is_balanced());
///
/// tree.insert_many([7000, 8000, 9000])?;
/// assert!(!tree.is_balanced());
///
/// tree.rebalance();
/// assert!(tree.is_balanced());
/// # Ok::<(), rebuildable_bst::Error>(())
/// ```
#[derive(Debug)]
pub struct Tree<T>(Link<T>);

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        free(self.0.take().into_iter().collect());
    }
}

impl<T> Tree<T>
where
    T: Compare + PartialEq,
{
    /// Build a height-balanced tree from an unordered collection of values.
    ///
    /// The values are sorted and duplicates removed before the tree is built,
    /// with each subtree rooted at the median of its range of values.
    ///
    /// Returns an error, and no tree, if any two values cannot be compared.
    ///
    /// ```
    /// use rebuildable_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 2])?;
    ///
    /// assert_eq!(tree.root().map(|v| *v.value()), Some(2));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn build<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let values = sort_dedup(values)?;
        Ok(Self(build_sorted(values)))
    }
}

impl<T> Tree<T>
where
    T: Compare,
{
    /// Insert `value` into the tree.
    ///
    /// Inserting a value that already exists is a no-op. The tree is not
    /// rebalanced.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        let slot = locate(&mut self.0, &value)?;

        if slot.is_some() {
            trace!("ignoring duplicate insert");
            return Ok(());
        }

        *slot = Some(Box::new(Node::new(value)));
        Ok(())
    }

    /// Insert each value in `values`, in order.
    ///
    /// If a value cannot be compared, the values before it remain inserted
    /// and the error is returned.
    pub fn insert_many<I>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|v| self.insert(v))
    }

    /// Remove `value` from the tree.
    ///
    /// Deleting a value that does not exist is a no-op. The tree is not
    /// rebalanced.
    ///
    /// ```
    /// use rebuildable_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3, 4, 5, 6, 7])?;
    ///
    /// // The root has two children, and is replaced by its in-order successor.
    /// tree.delete(&4)?;
    /// assert_eq!(tree.root().map(|v| *v.value()), Some(5));
    ///
    /// tree.delete(&42)?;
    /// assert_eq!(tree.len(), 6);
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<(), Error> {
        let slot = locate(&mut self.0, value)?;

        let Some(node) = slot.as_mut() else {
            trace!("ignoring delete of absent value");
            return Ok(());
        };

        // A node with two children is overwritten with the value of its
        // in-order successor (the minimum of the right subtree), which is then
        // spliced out of its old position.
        //
        //                   +----------+
        //              +----|  target  |----+
        //              |    +----------+    |
        //              v                    v
        //         +---------+          +---------+
        //         |  left   |     +----|  right  |
        //         +---------+     |    +---------+
        //                         v
        //                   +-----------+
        //                   | successor |----+
        //                   +-----------+    |
        //                                    v
        //                              (spliced up)
        //
        let (left, right) = node.slots_mut();
        if left.is_some() && right.is_some() {
            if let Some(successor) = extract_subtree_min(right) {
                node.replace_value(successor.into_value());
            }

            debug!("deleted node with two children");
            return Ok(());
        }

        // Otherwise the single child (if any) takes the place of the node.
        if let Some(mut node) = slot.take() {
            *slot = node.take_left().or_else(|| node.take_right());
            debug!(spliced_child = slot.is_some(), "deleted node");
        }

        Ok(())
    }

    /// An alias of [`Tree::delete()`].
    #[inline]
    pub fn delete_item(&mut self, value: &T) -> Result<(), Error> {
        self.delete(value)
    }

    /// Return the node holding `value`, if any.
    pub fn find(&self, value: &T) -> Result<Option<&Node<T>>, Error> {
        node::find(self.root(), value)
    }

    /// Returns true if `value` exists in the tree.
    pub fn contains(&self, value: &T) -> Result<bool, Error> {
        self.find(value).map(|v| v.is_some())
    }

    /// The height of the node holding `value` - the number of edges on the
    /// longest path from it down to a leaf.
    ///
    /// Returns [`Error::NotFound`] if `value` is not in the tree. Use
    /// [`Node::height()`] for a node already in hand.
    ///
    /// ```
    /// use rebuildable_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5, 6, 7])?;
    ///
    /// assert_eq!(tree.height(&4)?, 2);
    /// assert_eq!(tree.height(&6)?, 1);
    /// assert_eq!(tree.height(&7)?, 0);
    /// assert!(tree.height(&8).is_err());
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn height(&self, value: &T) -> Result<usize, Error> {
        self.find(value)?
            .map(Node::height)
            .ok_or(Error::NotFound("height"))
    }

    /// The depth of `value` - the number of edges on the path from the root
    /// down to the node holding it.
    ///
    /// Returns [`Error::NotFound`] if `value` is not in the tree.
    ///
    /// ```
    /// use rebuildable_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5, 6, 7])?;
    ///
    /// assert_eq!(tree.depth(&4)?, 0);
    /// assert_eq!(tree.depth(&7)?, 2);
    /// assert!(tree.depth(&8).is_err());
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn depth(&self, value: &T) -> Result<usize, Error> {
        let mut depth = 0;
        let mut ptr = self.root();

        while let Some(n) = ptr {
            ptr = match value.compare(n.value())? {
                Ordering::Less => n.left(),
                Ordering::Equal => return Ok(depth),
                Ordering::Greater => n.right(),
            };
            depth += 1;
        }

        Err(Error::NotFound("depth"))
    }

    /// The depth of `node`, located by searching for its value from the root.
    ///
    /// The node's identity is not used - a node from another tree resolves to
    /// the depth of the equal value in this one.
    pub fn node_depth(&self, node: &Node<T>) -> Result<usize, Error> {
        self.depth(node.value())
    }
}

impl<T> Tree<T> {
    /// Initialise an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node of the tree, or [`None`] if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        let n = fold_post_order(self.root(), 0, |_n, left, right| {
            ControlFlow::<Infallible, usize>::Continue(left + right + 1)
        });

        match n {
            ControlFlow::Continue(n) => n,
            ControlFlow::Break(never) => match never {},
        }
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        free(self.0.take().into_iter().collect());
    }

    /// Iterate over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut n = self.root()?;
        while let Some(left) = n.left() {
            n = left;
        }
        Some(n.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut n = self.root()?;
        while let Some(right) = n.right() {
            n = right;
        }
        Some(n.value())
    }

    /// The `index`-th smallest value in the tree (zero based).
    ///
    /// Returns [`Error::IndexOutOfRange`] if the tree holds `index` or fewer
    /// values.
    pub fn nth(&self, index: usize) -> Result<&T, Error> {
        self.iter().nth(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Visit every node breadth-first, from the root down and left to right
    /// within each level.
    pub fn level_order<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::level_order(self.root(), f)
    }

    /// Visit every node depth-first, each node before its left and right
    /// subtrees.
    pub fn pre_order<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::depth_first(self.root(), PRE_ORDER, f)
    }

    /// Visit every node depth-first, each node between its left and right
    /// subtrees (in ascending order).
    pub fn in_order<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::depth_first(self.root(), IN_ORDER, f)
    }

    /// Visit every node depth-first, each node after its left and right
    /// subtrees.
    pub fn post_order<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::depth_first(self.root(), POST_ORDER, f)
    }

    /// Visit every node in the given [`Order`].
    ///
    /// ```
    /// use rebuildable_bst::{Order, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5, 6, 7])?;
    ///
    /// let mut got = vec![];
    /// tree.traverse("post-order".parse::<Order>()?, |n| got.push(*n.value()));
    ///
    /// assert_eq!(got, [1, 3, 2, 5, 7, 6, 4]);
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn traverse<'a, F>(&'a self, order: Order, f: F)
    where
        F: FnMut(&'a Node<T>),
    {
        match order.push_order() {
            Some(push_order) => traversal::depth_first(self.root(), push_order, f),
            None => traversal::level_order(self.root(), f),
        }
    }

    /// Visit every node depth-first, expanding each node by pushing the
    /// [`Step`]s of `push_order` onto a stack in turn.
    ///
    /// As the stack is LIFO, nodes are visited in the reverse of the push
    /// order. Returns [`Error::InvalidArgument`] without visiting any node if
    /// `push_order` is not a permutation of the three steps.
    ///
    /// ```
    /// use rebuildable_bst::{Step, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3])?;
    ///
    /// // Descending order.
    /// let mut got = vec![];
    /// tree.depth_first([Step::Left, Step::Call, Step::Right], |n| got.push(*n.value()))?;
    /// assert_eq!(got, [3, 2, 1]);
    ///
    /// assert!(tree.depth_first([Step::Call; 3], |_| {}).is_err());
    /// # Ok::<(), rebuildable_bst::Error>(())
    /// ```
    pub fn depth_first<'a, F>(&'a self, push_order: [Step; 3], f: F) -> Result<(), Error>
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::validate(&push_order)?;
        traversal::depth_first(self.root(), push_order, f);
        Ok(())
    }

    /// Returns true if, for every node, the heights of its left and right
    /// subtrees differ by at most 1.
    ///
    /// Uses the default [`BalanceCheck::Iterative`], so any depth of tree can
    /// be checked.
    pub fn is_balanced(&self) -> bool {
        self.is_balanced_with(BalanceCheck::default())
    }

    /// Check the height-balance of the tree with [`BalanceCheck::Recursive`].
    ///
    /// The recursion is as deep as the tree, so a list-shaped tree of many
    /// thousands of values can overflow the call stack.
    pub fn is_balanced_recursive(&self) -> bool {
        self.is_balanced_with(BalanceCheck::Recursive)
    }

    /// Check the height-balance of the tree with [`BalanceCheck::Iterative`].
    pub fn is_balanced_iterative(&self) -> bool {
        self.is_balanced_with(BalanceCheck::Iterative)
    }

    /// Check the height-balance of the tree using the specified algorithm.
    pub fn is_balanced_with(&self, check: BalanceCheck) -> bool {
        check.check(self.root())
    }

    /// Rebuild the tree into a height-balanced shape holding the same values.
    pub fn rebalance(&mut self) {
        // The in-order walk yields the values sorted and free of duplicates.
        let values = IntoIter::new(self.0.take()).collect::<Vec<_>>();
        debug!(n_values = values.len(), "rebalancing tree");

        self.0 = build_sorted(values);
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.0.take())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    node::{Link, Node},
    Compare, Error,
};

/// Sort `values` with [`Compare`] and remove consecutive duplicates.
///
/// Duplicates are identified by structural equality ([`PartialEq`]) rather
/// than the comparator. If any comparison fails the first error is returned.
pub(crate) fn sort_dedup<T, I>(values: I) -> Result<Vec<T>, Error>
where
    T: Compare + PartialEq,
    I: IntoIterator<Item = T>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    let n_values = values.len();

    let mut values = merge_sort(values)?;
    values.dedup();

    debug!(n_values, n_distinct = values.len(), "sorted input values");
    Ok(values)
}

/// A stable, bottom-up merge sort that stops at the first failed comparison.
///
/// Runs of doubling length are merged pairwise until one remains. Every pair
/// of values adjacent in the output has been compared directly, so input
/// containing values of mixed kinds (or NaN) always surfaces an error.
fn merge_sort<T>(values: Vec<T>) -> Result<Vec<T>, Error>
where
    T: Compare,
{
    let mut runs = values.into_iter().map(|v| vec![v]).collect::<Vec<_>>();

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));

        let mut iter = runs.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => merged.push(merge(left, right)?),
                None => merged.push(left),
            }
        }

        runs = merged;
    }

    Ok(runs.pop().unwrap_or_default())
}

fn merge<T>(left: Vec<T>, right: Vec<T>) -> Result<Vec<T>, Error>
where
    T: Compare,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties take from the left run to keep the sort stable.
        let from_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.compare(l)? != Ordering::Less,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return Ok(out),
        };

        out.extend(if from_left { left.next() } else { right.next() });
    }
}

/// Build a height-balanced subtree from an ascending, duplicate-free sequence.
///
/// Each inclusive index range `[start, end]` is rooted at its middle element,
/// with the left and right sub-ranges forming the child subtrees. Rather than
/// recursing, pending ranges are kept on an explicit work list alongside the
/// empty slot their subtree root attaches to.
///
/// ```text
///
///   [1, 2, 3, 4, 5, 6, 7]                 4
///             ^                         /   \
///   [1, 2, 3]   [5, 6, 7]    ----->    2     6
///       ^           ^                 / \   / \
///                                    1   3 5   7
/// ```
///
/// The shape is fully determined by the middle-index selection, so the order
/// the work list is drained in only affects the order nodes are allocated.
pub(crate) fn build_sorted<T>(values: Vec<T>) -> Link<T> {
    let mut root = None;
    if values.is_empty() {
        return root;
    }

    let end = values.len() - 1;
    let mut values = values.into_iter().map(Some).collect::<Vec<_>>();

    let mut stack = vec![(&mut root, 0, end)];
    while let Some((slot, start, end)) = stack.pop() {
        let middle = start + (end - start) / 2;

        // Every index is the middle of exactly one range.
        let Some(value) = values[middle].take() else {
            continue;
        };

        let node = slot.insert(Box::new(Node::new(value)));
        let (left, right) = node.slots_mut();

        if middle > start {
            stack.push((left, start, middle - 1));
        }
        if middle < end {
            stack.push((right, middle + 1, end));
        }
    }

    root
}

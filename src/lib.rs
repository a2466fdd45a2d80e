//! An ordered binary search tree of unique values, with median-split
//! rebuilding and traversals that never exhaust the call stack.
//!
//! A [`Tree`] is built from an unordered collection in a height-balanced
//! shape, after which values can be inserted, deleted and searched for. As
//! the tree is never restructured by mutation, [`Tree::is_balanced()`] can be
//! used to detect a degenerate shape and [`Tree::rebalance()`] to fix it.
//!
//! ```
//! use rebuildable_bst::{Order, Tree};
//!
//! let mut tree = Tree::build([4, 2, 6, 1, 3, 5, 7])?;
//!
//! let mut values = vec![];
//! tree.traverse(Order::Level, |n| values.push(*n.value()));
//! assert_eq!(values, [4, 2, 6, 1, 3, 5, 7]);
//!
//! tree.delete(&4)?;
//! assert!(!tree.contains(&4)?);
//! assert_eq!(tree.depth(&7)?, 2);
//! # Ok::<(), rebuildable_bst::Error>(())
//! ```
//!
//! Values are ordered through the [`Compare`] trait, which allows the
//! comparison to fail - the dynamically-typed [`Value`] refuses to compare
//! values of different kinds, and every operation that compares surfaces the
//! [`Error`] to the caller.

mod balance;
mod builder;
mod compare;
mod display;
mod error;
mod frame;
mod iter;
mod node;
mod traversal;
mod tree;

#[cfg(test)]
mod test_utils;

pub use balance::BalanceCheck;
pub use compare::{Compare, Value};
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use node::Node;
pub use traversal::{Order, Step};
pub use tree::Tree;

//! A module containing [`BinaryTreeSet`] and associated types.
//!
//! There is no mutable iterator over the elements of a set because mutating the values in place
//! would break the ordering of the tree.

mod binary_tree_set;
mod iter;
mod node;

pub use binary_tree_set::*;
pub use iter::*;
pub(crate) use node::*;

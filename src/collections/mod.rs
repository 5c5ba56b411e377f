//! Various pointer-based collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as ownership of recursive types, borrowing across a traversal and iterators.
//!
//! # Method
//! Every node is owned by exactly one link, so nodes are never shared between collections and
//! copying a collection always builds a fresh chain.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;

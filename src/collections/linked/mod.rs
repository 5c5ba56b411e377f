//! Singly-linked collection types. Primarily revolves around [`SortedList`] and its accompanying
//! [`Cursor`] type, with [`SinglyLinkedList`] as the unordered counterpart.
//!
//! Both lists are built from the same owned node chain: each node holds its value and an
//! `Option<Box<_>>` link to the next one. Long chains are always torn down iteratively, so dropping
//! a list of any length never recurses.

mod iter;
mod node;
#[cfg(feature = "singly")]
pub mod singly;
#[cfg(feature = "sorted")]
pub mod sorted;

pub use iter::*;
pub(crate) use node::*;
#[doc(inline)]
#[cfg(feature = "singly")]
pub use singly::SinglyLinkedList;
#[doc(inline)]
#[cfg(feature = "sorted")]
pub use sorted::{Cursor, SortedList};
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, PrintError};

//! A module containing [`SinglyLinkedList`] and its owned iterator. Borrowed iteration uses the
//! shared [`Iter`](super::Iter) and [`IterMut`](super::IterMut) types.

mod iter;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub use singly_linked_list::*;

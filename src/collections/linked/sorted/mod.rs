//! A module containing [`SortedList`] and associated types.
//!
//! Borrowed iteration uses the shared [`Iter`](super::Iter) type. There is no mutable iterator,
//! because mutating values in place could break the ordering of the list.

mod cursor;
mod iter;
mod sorted_list;

pub use cursor::*;
pub use iter::*;
pub use sorted_list::*;

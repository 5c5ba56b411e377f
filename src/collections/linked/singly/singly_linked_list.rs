use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use tracing::Level;

use crate::collections::linked::{self as linked, Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::{DebugIter, write_chain};
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from front to back. Elements are kept in whatever
/// order they were inserted in.
///
/// There is no tail pointer, so anything that happens at the back of the list has to walk the
/// whole chain first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    /// Add the provided element to the back of the SinglyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let tail = linked::seek_link(&mut self.head, |_| false);
        *tail = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = linked::unlink(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.iter_mut().nth(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back by one. An
    /// `index` equal to the length appends to the list.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the SinglyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if `index` is greater
    /// than the length of the list.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        let link = linked::nth_link(&mut self.head, index);
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] if `index` is out of
    /// bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        let link = linked::nth_link(&mut self.head, index);
        let value = linked::unlink(link).ok_or(IndexOutOfBounds { index, len })?;
        self.len -= 1;
        Ok(value)
    }

    /// Reverses the order of the list in place, by turning every link around.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
        tracing::event!(Level::TRACE, "reversed singly linked list of {} elements", self.len);
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        linked::drop_chain(self.head.take());
        self.len = 0;
    }

    /// Writes every element to `out` from front to back, each followed by a single space. An empty
    /// list writes nothing.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for value in self.iter() {
            write!(out, "{value} ")?;
        }
        Ok(())
    }

    /// Produces the same output as [`print`](SinglyLinkedList::print), but walks the list by
    /// recursing into each link. The recursion is as deep as the list is long.
    pub fn print_recursive<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        Self::print_from(&self.head, out)
    }

    fn print_from<W: Write>(link: &Link<T>, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        match link {
            Some(node) => {
                write!(out, "{} ", node.value)?;
                Self::print_from(&node.next, out)
            },
            None => Ok(()),
        }
    }

    /// Returns an iterator over the elements of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let (head, len) = linked::chain_from_iter(iter);
        SinglyLinkedList { head, len }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        linked::drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && linked::chain_eq(&self.head, &other.head)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

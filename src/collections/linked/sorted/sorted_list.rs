use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::ops::Index;

use tracing::Level;

use super::Cursor;
use crate::collections::linked::{self as linked, Iter, Link, Node};
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, PrintError};
use crate::util::fmt::{DebugIter, write_chain};
use crate::util::result::ResultExtension;

/// A singly-linked list that keeps its values in non-decreasing order. See also: [`Cursor`] for
/// stepping through the list one node at a time.
///
/// Values that compare equal keep the order they were inserted in: a new value is always placed
/// after any equal values already in the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SortedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `count_nodes` | `O(n)` |
/// | `first` | `O(1)` |
/// | `last` | `O(n)` |
/// | `insert` | `O(n)` |
/// | `remove/remove_all` | `O(n)` |
/// | `remove_first` | `O(1)` |
/// | `remove_last` | `O(n)` |
/// | `remove_duplicates` | `O(n)` |
/// | `get` | `O(i)` |
/// | `get_from_end` | `O(n - i)` |
/// | `replace` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// # Panics
/// Every fallible method has a `try_*` counterpart that returns a [`Result`] instead of panicking.
pub struct SortedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SortedList<T> {
    /// Creates a new SortedList with no elements.
    pub const fn new() -> SortedList<T> {
        SortedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SortedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SortedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Counts the nodes reachable from the head by walking the whole list, rather than reading the
    /// stored length. The two should always agree.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut node = self.head.as_deref();
        while let Some(curr) = node {
            count += 1;
            node = curr.next.as_deref();
        }
        count
    }

    /// Returns a reference to the smallest element, if the list isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a reference to the largest element, if the list isn't empty.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns a reference to the largest element, returning an [`Err`] if the list is empty.
    pub fn try_last(&self) -> Result<&T, EmptyList> {
        self.last().ok_or(EmptyList)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SortedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Returns a reference to the element `index` places before the end of the list, so that an
    /// `index` of 0 refers to the last element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SortedList.
    pub fn get_from_end(&self, index: usize) -> &T {
        self.try_get_from_end(index).throw()
    }

    /// Returns a reference to the element `index` places before the end of the list, returning an
    /// [`Err`] on a failure rather than panicking.
    pub fn try_get_from_end(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        self.try_get(self.len - 1 - index)
    }

    /// Removes and returns the first (smallest) element.
    ///
    /// # Panics
    /// Panics if the SortedList is empty.
    pub fn remove_first(&mut self) -> T {
        self.try_remove_first().throw()
    }

    /// Removes and returns the first (smallest) element, returning an [`Err`] if the list is
    /// empty.
    pub fn try_remove_first(&mut self) -> Result<T, EmptyList> {
        let value = linked::unlink(&mut self.head).ok_or(EmptyList)?;
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the last (largest) element.
    ///
    /// # Panics
    /// Panics if the SortedList is empty.
    pub fn remove_last(&mut self) -> T {
        self.try_remove_last().throw()
    }

    /// Removes and returns the last (largest) element, returning an [`Err`] if the list is empty.
    pub fn try_remove_last(&mut self) -> Result<T, EmptyList> {
        let last_index = self.len.checked_sub(1).ok_or(EmptyList)?;
        // For a single element this is the head link itself, so there's no predecessor to fix up.
        let link = linked::nth_link(&mut self.head, last_index);
        let value = linked::unlink(link).ok_or(EmptyList)?;
        self.len -= 1;
        Ok(value)
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let len = self.len;
        linked::drop_chain(self.head.take());
        self.len = 0;
        tracing::event!(Level::TRACE, "cleared sorted list of {len} elements");
    }

    /// Writes every element to `out` in order, each followed by a single space.
    ///
    /// # Panics
    /// Panics if the SortedList is empty or if writing to `out` fails.
    pub fn print<W: Write>(&self, out: &mut W)
    where
        T: Display,
    {
        self.try_print(out).throw()
    }

    /// Writes every element to `out` in order, each followed by a single space, returning an
    /// [`Err`] if the list is empty or the writer fails.
    pub fn try_print<W: Write>(&self, out: &mut W) -> Result<(), PrintError>
    where
        T: Display,
    {
        if self.is_empty() {
            return Err(EmptyList.into());
        }
        for value in self.iter() {
            write!(out, "{value} ")?;
        }
        Ok(())
    }

    /// Returns a [`Cursor`] positioned before the first element.
    pub const fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns an iterator over the elements of the list, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a deep copy of the list, or [`None`] if there is nothing to copy.
    ///
    /// Unlike [`Clone`], which happily produces an empty list, an empty source yields no list at
    /// all.
    pub fn copy(&self) -> Option<SortedList<T>>
    where
        T: Clone,
    {
        (!self.is_empty()).then(|| self.clone())
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T: Ord> SortedList<T> {
    /// Adds `value` to the list, after any elements that are less than or equal to it.
    pub fn insert(&mut self, value: T) {
        let link = linked::seek_link(&mut self.head, |existing| *existing > value);
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
    }

    /// Removes the first element equal to `value` and returns it, or returns [`None`] if there is
    /// no such element.
    ///
    /// # Panics
    /// Panics if the SortedList is empty.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.try_remove(value).throw()
    }

    /// Removes the first element equal to `value` and returns it, returning an [`Err`] if the list
    /// is empty. A missing value is not an error: the list is left untouched and `Ok(None)` is
    /// returned.
    pub fn try_remove(&mut self, value: &T) -> Result<Option<T>, EmptyList> {
        if self.is_empty() {
            return Err(EmptyList);
        }

        let link = linked::seek_link(&mut self.head, |existing| existing == value);
        let removed = linked::unlink(link);
        if removed.is_some() {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Removes every element equal to `value`, returning how many were removed.
    ///
    /// # Panics
    /// Panics if the SortedList is empty.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.try_remove_all(value).throw()
    }

    /// Removes every element equal to `value`, returning how many were removed or an [`Err`] if
    /// the list is empty.
    pub fn try_remove_all(&mut self, value: &T) -> Result<usize, EmptyList> {
        if self.is_empty() {
            return Err(EmptyList);
        }

        let mut removed = 0;

        // Peel off any matching run at the head first, so that the sweep below always has a
        // surviving node to unlink successors from.
        while self.head.as_ref().is_some_and(|node| node.value == *value) {
            linked::unlink(&mut self.head);
            removed += 1;
        }

        let mut node = self.head.as_deref_mut();
        while let Some(curr) = node {
            while curr.next.as_ref().is_some_and(|next| next.value == *value) {
                linked::unlink(&mut curr.next);
                removed += 1;
            }
            node = curr.next.as_deref_mut();
        }

        self.len -= removed;
        tracing::event!(Level::TRACE, "removed {removed} matching values from sorted list");
        Ok(removed)
    }

    /// Collapses every run of equal elements down to its first element, returning how many
    /// elements were removed.
    ///
    /// # Panics
    /// Panics if the SortedList is empty.
    pub fn remove_duplicates(&mut self) -> usize {
        self.try_remove_duplicates().throw()
    }

    /// Collapses every run of equal elements down to its first element, returning how many
    /// elements were removed or an [`Err`] if the list is empty.
    pub fn try_remove_duplicates(&mut self) -> Result<usize, EmptyList> {
        if self.is_empty() {
            return Err(EmptyList);
        }

        let mut removed = 0;
        let mut node = self.head.as_deref_mut();

        // The list is sorted, so equal elements are always adjacent.
        while let Some(curr) = node {
            while curr.next.as_ref().is_some_and(|next| next.value == curr.value) {
                linked::unlink(&mut curr.next);
                removed += 1;
            }
            node = curr.next.as_deref_mut();
        }

        self.len -= removed;
        tracing::event!(Level::TRACE, "removed {removed} duplicate values from sorted list");
        Ok(removed)
    }

    /// Replaces the element at `index` with `new_value`, returning the old element. The new value
    /// is moved to wherever it belongs in the ordering, so it won't necessarily end up at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SortedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning the old element or an [`Err`]
    /// if `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let link = linked::nth_link(&mut self.head, index);
        let old_value = linked::unlink(link).ok_or(IndexOutOfBounds { index, len: self.len })?;
        self.len -= 1;
        self.insert(new_value);
        Ok(old_value)
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        // Everything past the first greater element is greater too.
        self.iter()
            .take_while(|existing| *existing <= value)
            .any(|existing| existing == value)
    }

    /// Checks that every element is less than or equal to its successor.
    pub fn is_sorted(&self) -> bool {
        self.iter().is_sorted()
    }
}

impl<T> Index<usize> for SortedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        linked::drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for SortedList<T> {
    fn clone(&self) -> Self {
        // The source is already in order, so the values can be chained as-is.
        let (head, len) = linked::chain_from_iter(self.iter().cloned());
        SortedList { head, len }
    }
}

impl<T: PartialEq> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && linked::chain_eq(&self.head, &other.head)
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T: Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SortedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SortedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

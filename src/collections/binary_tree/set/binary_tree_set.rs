use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter};
use crate::util::fmt::DebugRaw;

/// A set backed by an unbalanced binary search tree.
///
/// Values are placed purely by comparison as they arrive, so the shape of the tree (and with it
/// the cost of every lookup) depends on insertion order. Inserting values in sorted order
/// degenerates the tree into a list, with a [`height`](BinaryTreeSet::height) equal to its length.
pub struct BinaryTreeSet<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinaryTreeSet<T> {
    /// Creates a new BinaryTreeSet with no elements.
    pub const fn new() -> BinaryTreeSet<T> {
        BinaryTreeSet {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of elements in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` to the set, returning false if an equal value was already present. In that
    /// case the set is left unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns a reference to the element equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get(value)
    }

    /// Returns true if the set contains an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// set.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns a reference to the smallest element, if the set isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns a reference to the largest element, if the set isn't empty.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Removes and returns the smallest value in the set.
    pub fn take_first(&mut self) -> Option<T> {
        let value = self.root.take_first()?;
        self.len -= 1;
        Some(value)
    }

    /// Removes every element from the set.
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    /// Returns an iterator over the elements of the set, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> Default for BinaryTreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinaryTreeSet<T> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<T: Ord> FromIterator<T> for BinaryTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BinaryTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BinaryTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + Debug> Debug for BinaryTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeSet")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinaryTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

use std::iter::FusedIterator;

use super::{BinaryTreeSet, Branch, Node};

impl<T: Ord> IntoIterator for BinaryTreeSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owning iterator over the values of a [`BinaryTreeSet`], in ascending order.
pub struct IntoIter<T: Ord>(BinaryTreeSet<T>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Walks down the left spine every time, so this is O(height) per item.
        self.0.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a BinaryTreeSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.push_left_spine(&self.root);
        iter
    }
}

/// A borrowing iterator over the values of a [`BinaryTreeSet`], in ascending order.
pub struct Iter<'a, T: Ord> {
    // Nodes whose value hasn't been yielded yet, with the next one on top.
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    fn push_left_spine(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

use super::SortedList;
use crate::collections::linked::Node;

/// A read-only cursor over a [`SortedList`], stepped forward manually with
/// [`move_next`](Cursor::move_next) and rewound with [`reset`](Cursor::reset).
///
/// A cursor borrows the list it walks, so any number of cursors can traverse the same list at
/// once, and the list can't be modified while any of them are alive.
///
/// A cursor starts out before the first element. Each call to `move_next` steps onto the next
/// element and reports whether there was one to step onto. Once it steps off the end, it stays
/// there until it is reset.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a SortedList<T>,
    pub(crate) pos: CursorPosition<'a, T>,
}

pub(crate) enum CursorPosition<'a, T> {
    /// Before the first element.
    Head,
    Ptr {
        node: &'a Node<T>,
        index: usize,
    },
    /// After the last element.
    Tail,
}

use CursorPosition::*;

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(list: &'a SortedList<T>) -> Cursor<'a, T> {
        Cursor {
            list,
            pos: Head,
        }
    }

    /// Moves the cursor back to before the first element.
    pub fn reset(&mut self) {
        self.pos = Head;
    }

    /// Advances the cursor by one element, returning true if it now rests on an element and false
    /// if it has moved past the end of the list.
    pub fn move_next(&mut self) -> bool {
        self.pos = match self.pos {
            Head => Self::position_at(self.list.head.as_deref(), 0),
            Ptr { node, index } => Self::position_at(node.next.as_deref(), index + 1),
            Tail => Tail,
        };
        matches!(self.pos, Ptr { .. })
    }

    /// Returns the element under the cursor, or [`None`] if the cursor isn't resting on one.
    pub const fn current(&self) -> Option<&'a T> {
        match self.pos {
            Ptr { node, .. } => Some(&node.value),
            Head | Tail => None,
        }
    }

    /// Returns the index of the element under the cursor, if there is one.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Ptr { index, .. } => Some(index),
            Head | Tail => None,
        }
    }

    /// Returns true once the cursor has moved past the last element.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.pos, Tail)
    }

    fn position_at(node: Option<&'a Node<T>>, index: usize) -> CursorPosition<'a, T> {
        match node {
            Some(node) => Ptr { node, index },
            None => Tail,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<T> Clone for CursorPosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorPosition<'_, T> {}

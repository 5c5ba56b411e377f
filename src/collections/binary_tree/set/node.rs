use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    /// Walks down from this branch and returns the branch that holds a value equal to `value`, or
    /// the empty branch where such a value would be placed.
    pub fn seek_mut<Q>(&mut self, value: &Q) -> &mut Branch<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                Some(node) => value.cmp(node.value.borrow()),
                None => break,
            };
            if ordering == Ordering::Equal {
                break;
            }
            // Only borrowed mutably once we know we're moving down, so the branch is still free to
            // return on the paths that break out above.
            if let Some(ref mut node) = branch.0 {
                branch = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
        branch
    }

    /// Inserts `value` into the subtree, returning false if an equal value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let branch = self.seek_mut(&value);
        if branch.0.is_some() {
            return false;
        }
        branch.0 = Some(Box::new(Node {
            left: None.into(),
            right: None.into(),
            value,
        }));
        true
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            match value.cmp(node.value.borrow()) {
                Ordering::Less => branch = &node.left,
                Ordering::Greater => branch = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// The number of nodes on the longest path from this branch down to a leaf, counted one level
    /// at a time.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.0.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes the smallest value in the subtree, moving its right child up into its place.
    pub fn take_first(&mut self) -> Option<T> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.left.is_some()) {
            // The loop condition has already checked that the branch is occupied.
            if let Some(ref mut node) = branch.0 {
                branch = &mut node.left;
            }
        }

        let node = branch.0.take()?;
        let Node { right, value, .. } = *node;
        *branch = right;
        Some(value)
    }

    /// Drops every node in the subtree, keeping pending subtrees on the heap rather than recursing
    /// through `Box`'s destructor.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}

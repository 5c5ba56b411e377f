pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node { value, next })
    }
}

/// Walks forward from `link` and returns the first link that is either empty or holds a value for
/// which `stop` returns true.
///
/// The returned link can be written to directly, which is how insertion and unlinking are done
/// without tracking a separate "previous" node.
pub(crate) fn seek_link<T>(
    mut link: &mut Link<T>,
    mut stop: impl FnMut(&T) -> bool,
) -> &mut Link<T> {
    while link.as_ref().is_some_and(|node| !stop(&node.value)) {
        // The loop condition has already checked that the link is occupied.
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// Returns the link holding the node at `index`, or the trailing empty link if the chain is
/// shorter than that.
pub(crate) fn nth_link<T>(link: &mut Link<T>, index: usize) -> &mut Link<T> {
    let mut remaining = index;
    seek_link(link, |_| {
        if remaining == 0 {
            return true;
        }
        remaining -= 1;
        false
    })
}

/// Unlinks the node held by `link`, splicing its successor into its place.
pub(crate) fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}

/// Builds a fresh chain holding the items of `iter` in order, returning it alongside its length.
pub(crate) fn chain_from_iter<T>(iter: impl IntoIterator<Item = T>) -> (Link<T>, usize) {
    let mut head = None;
    let mut tail = &mut head;
    let mut len = 0;

    for value in iter {
        tail = &mut tail.insert(Node::boxed(value, None)).next;
        len += 1;
    }

    (head, len)
}

/// Compares two chains pairwise, one node at a time, so the stack depth doesn't grow with the
/// length of the chains.
pub(crate) fn chain_eq<T: PartialEq>(a: &Link<T>, b: &Link<T>) -> bool {
    let mut node_a = a.as_deref();
    let mut node_b = b.as_deref();

    loop {
        match (node_a, node_b) {
            (Some(a), Some(b)) => {
                if a.value != b.value {
                    break false;
                }
                node_a = a.next.as_deref();
                node_b = b.next.as_deref();
            },
            (None, None) => break true,
            _ => break false,
        }
    }
}

/// Drops every node in the chain without recursing through `Box`'s destructor.
pub(crate) fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

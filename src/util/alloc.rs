use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// A value that bumps a shared counter when dropped, used to check that lists release every node
/// they own. Comparisons only look at `key`.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub key: usize,
    pub counter: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(key: usize, counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            key,
            counter: Rc::clone(counter),
        }
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CountedDrop {}

impl PartialOrd for CountedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CountedDrop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

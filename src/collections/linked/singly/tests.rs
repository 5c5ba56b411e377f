#![cfg(test)]

use std::cell::Cell;
use std::iter;
use std::rc::Rc;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn contents<T: Copy>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().copied().collect()
}

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(contents(&list), [1, 2, 3]);
    assert_eq!(list.len(), 3, "Every insertion should be counted.");
    assert_eq!(list.front(), Some(&1));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_insert() {
    let mut list = SinglyLinkedList::from_iter([10, 30]);

    list.insert(1, 20);
    assert_eq!(contents(&list), [10, 20, 30]);

    list.insert(0, 0);
    assert_eq!(contents(&list), [0, 10, 20, 30], "Index 0 should insert at the front.");

    list.insert(4, 40);
    assert_eq!(contents(&list), [0, 10, 20, 30, 40], "Index len should append.");
    assert_eq!(list.len(), 5);

    assert_eq!(list.try_insert(6, 0), Err(IndexOutOfBounds { index: 6, len: 5 }));
    assert_panics!({
        SinglyLinkedList::from_iter([1]).insert(2, 0);
    });

    let mut empty = SinglyLinkedList::new();
    empty.insert(0, 'a');
    assert_eq!(contents(&empty), ['a']);
}

#[test]
fn test_remove() {
    let mut list = SinglyLinkedList::from_iter(0..5);

    assert_eq!(list.remove(2), 2);
    assert_eq!(contents(&list), [0, 1, 3, 4]);
    assert_eq!(list.remove(0), 0, "Index 0 should remove the front.");
    assert_eq!(list.remove(2), 4, "The last index should remove the back.");
    assert_eq!(contents(&list), [1, 3]);
    assert_eq!(list.len(), 2);

    assert_eq!(list.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(
        SinglyLinkedList::<u8>::new().try_remove(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
    assert_panics!({
        SinglyLinkedList::<u8>::new().remove(0);
    });
}

#[test]
fn test_reverse() {
    let mut list = SinglyLinkedList::from_iter(1..=4);
    list.reverse();
    assert_eq!(contents(&list), [4, 3, 2, 1]);
    assert_eq!(list.len(), 4);

    list.reverse();
    assert_eq!(contents(&list), [1, 2, 3, 4], "Reversing twice should restore the order.");

    let mut empty = SinglyLinkedList::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = SinglyLinkedList::from_iter(['x']);
    single.reverse();
    assert_eq!(contents(&single), ['x']);
}

#[test]
fn test_print() {
    let list = SinglyLinkedList::from_iter([5, 6, 7]);

    let mut out = Vec::new();
    list.print(&mut out).expect("writing to a Vec can't fail");
    assert_eq!(out, b"5 6 7 ");

    let mut recursive = Vec::new();
    list.print_recursive(&mut recursive).expect("writing to a Vec can't fail");
    assert_eq!(out, recursive, "Both print methods should produce the same output.");

    let mut out = Vec::new();
    SinglyLinkedList::<u8>::new().print(&mut out).expect("writing to a Vec can't fail");
    assert!(out.is_empty(), "An empty list should print nothing.");
}

#[test]
fn test_indexing() {
    let mut list = SinglyLinkedList::from_iter(['a', 'b', 'c']);
    assert_eq!(list[1], 'b');

    list[1] = 'z';
    *list.get_mut(2) = 'y';
    assert_eq!(contents(&list), ['a', 'z', 'y']);

    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.index_of(&'y'), Some(2));
    assert!(list.contains(&'a'));
    assert!(!list.contains(&'b'));
    assert_panics!({ let _ = list[3]; });
}

#[test]
fn test_iterators() {
    let mut list = SinglyLinkedList::from_iter(0..5);

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(contents(&list), [0, 2, 4, 6, 8]);
    assert_eq!(list.iter().len(), 5);

    assert_eq!(list.clone(), list, "A clone should compare equal.");
    assert_ne!(list, SinglyLinkedList::from_iter([0, 2, 4, 6]));

    let owned: Vec<_> = list.into_iter().collect();
    assert_eq!(owned, [0, 2, 4, 6, 8]);
}

#[test]
fn test_formatting() {
    let list = SinglyLinkedList::from_iter([3, 1]);
    assert_eq!(list.to_string(), "(3) -> (1)");
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [3, 1], len: 2 }");
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| CountedDrop::new(0, &counter))
        .take(10)
        .collect();

    drop(list.remove(4));
    assert_eq!(counter.get(), 1, "The removed element should be dropped once.");

    list.clear();
    assert_eq!(counter.get(), 10, "Clearing should drop every element.");

    let list: SinglyLinkedList<u32> = (0..500_000).collect();
    drop(list);
}

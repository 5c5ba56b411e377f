use std::io::{self, Write};

use linked_collections::collections::binary_tree::BinaryTreeSet;
use linked_collections::collections::linked::{PrintError, SinglyLinkedList, SortedList};

fn main() -> Result<(), PrintError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "\n[SortedList]\n")?;

    let mut sorted = SortedList::new();
    for value in [5, 1, 3, 3, 9, 1] {
        sorted.insert(value);
        writeln!(out, "{sorted}")?;
    }

    sorted.remove_duplicates();
    write!(out, "without duplicates: ")?;
    sorted.try_print(&mut out)?;
    writeln!(out)?;

    let mut cursor = sorted.cursor();
    while cursor.move_next() {
        if let (Some(index), Some(value)) = (cursor.index(), cursor.current()) {
            writeln!(out, "  [{index}] = {value}")?;
        }
    }

    writeln!(out, "copy of an empty list: {:?}", SortedList::<i32>::new().copy())?;

    writeln!(out, "\n[SinglyLinkedList]\n")?;

    let mut list: SinglyLinkedList<_> = (1..=5).collect();
    list.insert(2, 100);
    writeln!(out, "{list}")?;
    list.reverse();
    list.print_recursive(&mut out)?;
    writeln!(out)?;

    writeln!(out, "\n[BinaryTreeSet]\n")?;

    let tree = BinaryTreeSet::from_iter([4, 2, 6, 1, 3, 5, 7]);
    writeln!(out, "{tree} (height {})", tree.height())?;
    writeln!(out, "{tree:?}")?;

    Ok(())
}

use std::fmt::{self, Debug, Display, Formatter};

/// Formats the items of a cloneable iterator as a debug list, without collecting them first.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes each item of `iter` in the form `(a) -> (b) -> (c)`, shared by the linked lists'
/// [`Display`] implementations.
pub fn write_chain<I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    I: Iterator,
    I::Item: Debug,
{
    write!(f, "(")?;
    for (index, item) in iter.enumerate() {
        if index > 0 {
            write!(f, ") -> (")?;
        }
        write!(f, "{item:?}")?;
    }
    write!(f, ")")
}

/// Wraps a [`Display`] value so that it is printed as-is by a [`Debug`] formatter.
pub struct DebugRaw<D: Display>(pub D);

impl<D: Display> Debug for DebugRaw<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

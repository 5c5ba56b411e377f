use std::io;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when an index falls outside of a collection's bounds.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// Returned by operations that need at least one element to act on.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("operation requires a non-empty list")]
pub struct EmptyList;

/// The ways writing a list to an output sink can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum PrintError {
    /// The list had no elements to write.
    EmptyList(EmptyList),
    /// Writing to the sink failed.
    Io(io::Error),
}
